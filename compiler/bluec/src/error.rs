//! Driver errors: file access, arguments, output.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("missing file path")]
    MissingPath,

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value for --max-depth: '{0}'")]
    InvalidMaxDepth(String),

    #[error(transparent)]
    Output(#[from] io::Error),

    #[error("cannot serialize to JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DriverError {
    /// Classify a failure to read `path`.
    #[cold]
    pub fn reading(path: &str, error: io::Error) -> Self {
        let path = path.to_string();
        match error.kind() {
            io::ErrorKind::NotFound => DriverError::NotFound { path },
            io::ErrorKind::PermissionDenied => DriverError::PermissionDenied { path },
            io::ErrorKind::InvalidData => DriverError::InvalidUtf8 { path },
            _ => DriverError::Read {
                path,
                source: error,
            },
        }
    }
}

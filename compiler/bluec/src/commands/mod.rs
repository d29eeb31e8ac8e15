//! Command handlers for the `blue` CLI.
//!
//! Argument parsing and file reading live here; each submodule implements
//! one command.

mod debug;
mod run;

pub use debug::{lex_file, lex_source, parse_file, parse_source};
pub use run::{run_file, run_source};

use blue_eval::Interpreter;

use crate::DriverError;

/// Output format for `lex` and `parse`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Options for `run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Call-depth limit; `0` means unlimited.
    pub max_depth: usize,
    /// Evaluate every line on its own, each in a fresh environment.
    pub lines: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            max_depth: Interpreter::DEFAULT_MAX_DEPTH,
            lines: false,
        }
    }
}

impl RunOptions {
    pub(crate) fn interpreter(&self) -> Interpreter {
        match self.max_depth {
            0 => Interpreter::unbounded(),
            depth => Interpreter::with_max_depth(depth),
        }
    }
}

/// Parse `<file> [--max-depth=<n>] [--lines]` in any order.
pub fn parse_run_args(args: &[String]) -> Result<(String, RunOptions), DriverError> {
    let mut options = RunOptions::default();
    let mut path = None;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            options.max_depth = value
                .parse()
                .map_err(|_| DriverError::InvalidMaxDepth(value.to_string()))?;
        } else if arg == "--lines" {
            options.lines = true;
        } else if arg.starts_with('-') {
            return Err(DriverError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        }
    }

    let path = path.ok_or(DriverError::MissingPath)?;
    Ok((path, options))
}

/// Parse `<file> [--json]` in any order.
pub fn parse_debug_args(args: &[String]) -> Result<(String, Format), DriverError> {
    let mut format = Format::Text;
    let mut path = None;

    for arg in args {
        if arg == "--json" {
            format = Format::Json;
        } else if arg.starts_with('-') {
            return Err(DriverError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        }
    }

    let path = path.ok_or(DriverError::MissingPath)?;
    Ok((path, format))
}

pub(crate) fn read_file(path: &str) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|e| DriverError::reading(path, e))
}

/// True for paths ending in `.blue` (any case).
pub fn is_blue_file(path: &str) -> bool {
    std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("blue"))
}

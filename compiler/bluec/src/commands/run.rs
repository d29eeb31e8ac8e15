//! `blue run`: evaluate a file and print the result.

use std::io::{self, Write};

use blue_eval::Environment;
use blue_parse::parse;
use tracing::debug;

use super::{read_file, RunOptions};
use crate::DriverError;

/// Evaluate a file, writing results to stdout and warnings to stderr.
///
/// Returns `Ok(false)` if evaluation produced an error value.
pub fn run_file(path: &str, options: &RunOptions) -> Result<bool, DriverError> {
    let source = read_file(path)?;
    debug!(path, bytes = source.len(), lines = options.lines, "run");
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_source(&source, options, &mut stdout.lock(), &mut stderr.lock())
}

/// Evaluate `source`.
///
/// In whole-file mode the program runs once and the inspected result is
/// printed. In line mode each non-blank line is parsed and run on its own in
/// a fresh environment, printing one result per line. Parse diagnostics go
/// to `warnings`. Returns `Ok(false)` if any result was an error.
pub fn run_source(
    source: &str,
    options: &RunOptions,
    out: &mut impl Write,
    warnings: &mut impl Write,
) -> Result<bool, DriverError> {
    let mut interpreter = options.interpreter();

    if !options.lines {
        let output = parse(source);
        for error in &output.errors {
            writeln!(warnings, "warning: {error}")?;
        }
        let result = interpreter.eval_program(&output.program, &Environment::new());
        writeln!(out, "{result}")?;
        return Ok(!result.is_error());
    }

    let mut ok = true;
    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index.saturating_add(1);
        let output = parse(line);
        for error in &output.errors {
            writeln!(
                warnings,
                "warning: line {line_number}, column {}: {}",
                error.column,
                error.message()
            )?;
        }
        let result = interpreter.eval_program(&output.program, &Environment::new());
        writeln!(out, "{result}")?;
        ok &= !result.is_error();
    }
    Ok(ok)
}

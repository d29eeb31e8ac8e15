//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::io::{self, Write};

use blue_ir::Program;
use blue_lexer::lex;
use blue_parse::parse;
use serde::Serialize;

use super::{read_file, Format};
use crate::DriverError;

/// Lex a file and print its token stream.
pub fn lex_file(path: &str, format: Format) -> Result<(), DriverError> {
    let source = read_file(path)?;
    lex_source(path, &source, format, &mut io::stdout().lock())
}

pub fn lex_source(
    name: &str,
    source: &str,
    format: Format,
    out: &mut impl Write,
) -> Result<(), DriverError> {
    let tokens = lex(source);
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &tokens)?;
            writeln!(out)?;
        }
        Format::Text => {
            writeln!(out, "Tokens for '{name}' ({} tokens):", tokens.len())?;
            for token in &tokens {
                writeln!(out, "  {token:?}")?;
            }
        }
    }
    Ok(())
}

/// JSON shape of `blue parse --json`.
#[derive(Serialize)]
struct ParseDump<'a> {
    program: &'a Program,
    errors: Vec<String>,
}

/// Parse a file and print the tree and any diagnostics.
pub fn parse_file(path: &str, format: Format) -> Result<(), DriverError> {
    let source = read_file(path)?;
    parse_source(path, &source, format, &mut io::stdout().lock())
}

pub fn parse_source(
    name: &str,
    source: &str,
    format: Format,
    out: &mut impl Write,
) -> Result<(), DriverError> {
    let output = parse(source);
    match format {
        Format::Json => {
            let dump = ParseDump {
                program: &output.program,
                errors: output.errors.iter().map(ToString::to_string).collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &dump)?;
            writeln!(out)?;
        }
        Format::Text => {
            writeln!(
                out,
                "Parse result for '{name}' ({} statements, {} errors):",
                output.program.statements.len(),
                output.errors.len()
            )?;
            for stmt in &output.program.statements {
                writeln!(out, "  {stmt}")?;
            }
            if output.has_errors() {
                writeln!(out)?;
                writeln!(out, "Errors:")?;
                for error in &output.errors {
                    writeln!(out, "  {error}")?;
                }
            }
        }
    }
    Ok(())
}

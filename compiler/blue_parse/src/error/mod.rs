//! Parse diagnostics.
//!
//! The parser never stops on an error. Each [`ParseError`] describes one
//! construct that was dropped from the tree, positioned at the token where
//! the problem was noticed.

use blue_ir::{Span, Token, TokenKind};
use thiserror::Error;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A specific token was required here.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: &'static str, found: String },

    /// The token cannot begin an expression.
    #[error("expected an expression, found {found}")]
    ExpectedExpression { found: String },

    /// The token cannot begin a statement.
    #[error("unexpected {found} at start of statement")]
    UnexpectedStatementStart { found: String },

    /// A digit run that does not fit in a 64-bit signed integer.
    #[error("integer literal `{lexeme}` is out of range")]
    IntegerOutOfRange { lexeme: String },
}

impl ParseErrorKind {
    #[cold]
    pub(crate) fn unexpected(expected: &'static str, found: &Token) -> Self {
        ParseErrorKind::UnexpectedToken {
            expected,
            found: describe(found),
        }
    }

    #[cold]
    pub(crate) fn expected_expression(found: &Token) -> Self {
        ParseErrorKind::ExpectedExpression {
            found: describe(found),
        }
    }

    #[cold]
    pub(crate) fn statement_start(found: &Token) -> Self {
        ParseErrorKind::UnexpectedStatementStart {
            found: describe(found),
        }
    }
}

/// A positioned parse diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{line}:{column}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: u32,
    pub column: u32,
    pub span: Span,
}

impl ParseError {
    /// Error positioned at `token`.
    #[cold]
    pub fn at(kind: ParseErrorKind, token: &Token) -> Self {
        ParseError {
            kind,
            line: token.line,
            column: token.column,
            span: token.span,
        }
    }

    /// The message without its position.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// `end of input` for `Eof`, otherwise the lexeme in backticks.
fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Eof => TokenKind::Eof.display_name().to_string(),
        _ => format!("`{}`", token.lexeme),
    }
}

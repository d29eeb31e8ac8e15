//! Parser for Blue.
//!
//! Statements are parsed by recursive descent, expressions by Pratt parsing
//! (see [`grammar`]). The parser is lenient: a construct it cannot classify
//! is left out of the [`Program`] and parsing carries on with the next token.
//! Every construct it leaves out is also recorded as a [`ParseError`].
//!
//! The parser keeps exactly two tokens of lookahead, `current` and `peek`.
//! A statement parser starts with `current` on the statement's first token
//! and returns with `current` on its last token; the caller then advances.

mod error;
mod grammar;

pub use error::{ParseError, ParseErrorKind};
pub use grammar::Precedence;

use blue_ir::{Program, Token, TokenKind};
use blue_lexer::Lexer;
use tracing::debug;

/// Parser state.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Create a parser and prime the two-token window.
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Parser {
            lexer,
            current: Token::dummy(TokenKind::Eof, ""),
            peek: Token::dummy(TokenKind::Eof, ""),
            errors: Vec::new(),
        };
        parser.advance();
        parser.advance();
        parser
    }

    /// Parse statements until end of input.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.current.is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.advance();
        }
        debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        Program::new(statements)
    }

    /// Diagnostics recorded so far, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Shift the window one token forward.
    fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advance if the peek token has `kind`; otherwise record an error.
    fn expect_peek(&mut self, kind: TokenKind, expected: &'static str) -> bool {
        if self.peek.is(kind) {
            self.advance();
            true
        } else {
            self.error_at_peek(ParseErrorKind::unexpected(expected, &self.peek));
            false
        }
    }

    /// Step onto a trailing `;` if there is one.
    fn skip_optional_semicolon(&mut self) {
        if self.peek.is(TokenKind::Semicolon) {
            self.advance();
        }
    }

    #[cold]
    fn error_at_current(&mut self, kind: ParseErrorKind) {
        let error = ParseError::at(kind, &self.current);
        debug!(%error, "parse error");
        self.errors.push(error);
    }

    #[cold]
    fn error_at_peek(&mut self, kind: ParseErrorKind) {
        let error = ParseError::at(kind, &self.peek);
        debug!(%error, "parse error");
        self.errors.push(error);
    }
}

/// A parsed program together with the diagnostics for what was left out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex and parse a whole source string.
pub fn parse(source: &str) -> ParseOutput {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    ParseOutput {
        program,
        errors: parser.into_errors(),
    }
}

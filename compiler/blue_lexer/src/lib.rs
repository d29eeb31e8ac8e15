//! Lexer for Blue.
//!
//! Turns source text into a lazy stream of [`Token`]s. The lexer never fails:
//! a character it does not recognise becomes a one-character identifier
//! token, and the parser decides what to make of it.
//!
//! # Token classes
//!
//! - identifier / keyword: a letter or `_`, then letters, digits and `_`
//! - number: a run of ASCII digits (no sign, no fraction; `-5` is two tokens)
//! - operator: `+ - * /`, `=` and `==`
//! - structural: `{ } ( ) ; ,`
//! - end of input: `Eof` with an empty lexeme, repeated on every further call

mod cursor;

use blue_ir::{Keyword, Span, Token, TokenKind};
use tracing::trace;

use cursor::Cursor;

/// Streaming lexer over a source string.
///
/// Each instance is independent; lexing the same text with a fresh instance
/// always yields the same tokens.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    /// Set once the iterator has handed out `Eof`.
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            finished: false,
        }
    }

    /// Scan and return the next token.
    ///
    /// Once the input is exhausted every call returns an `Eof` token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.cursor.pos();
        let line = self.cursor.line();
        let column = self.cursor.column();

        let Some(c) = self.cursor.current() else {
            let span = Span::point(span_offset(start));
            return Token::new(TokenKind::Eof, "", line, column, span);
        };

        let kind = if is_ident_start(c) {
            self.cursor.eat_while(is_ident_continue);
            match Keyword::lookup(self.cursor.slice_from(start)) {
                Some(_) => TokenKind::Keyword,
                None => TokenKind::Ident,
            }
        } else if c.is_ascii_digit() {
            self.cursor.eat_while(|c| c.is_ascii_digit());
            TokenKind::Number
        } else if c == '=' && self.cursor.peek() == Some('=') {
            self.cursor.bump();
            self.cursor.bump();
            TokenKind::Operator
        } else {
            self.cursor.bump();
            Self::single_char_kind(c)
        };

        let lexeme = self.cursor.slice_from(start);
        trace!(
            ?kind,
            lexeme,
            line,
            column,
            char_offset = self.cursor.char_pos(),
            "token"
        );
        Token::new(
            kind,
            lexeme,
            line,
            column,
            Span::from_range(start..self.cursor.pos()),
        )
    }

    /// Classify a character that starts neither an identifier nor a number.
    fn single_char_kind(c: char) -> TokenKind {
        match c {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '+' | '-' | '*' | '/' | '=' => TokenKind::Operator,
            _ => TokenKind::Ident,
        }
    }

    fn skip_whitespace(&mut self) {
        self.cursor
            .eat_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token including a single trailing `Eof`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Lex a whole source string. The last token is always `Eof`.
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Letters are Unicode alphabetic characters, plus `_`.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn span_offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

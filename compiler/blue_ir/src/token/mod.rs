//! Token types for the Blue lexer.

use std::fmt;

use crate::Span;

/// Lexical category of a token.
///
/// Deliberately coarse: all operators share [`TokenKind::Operator`] and all
/// reserved words share [`TokenKind::Keyword`]; the lexeme tells them apart.
/// The parser keys its prefix/infix rule tables on this enum.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    Eof,
    Ident,
    Number,
    Operator,
    Keyword,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Semicolon,
    Comma,
}

impl TokenKind {
    /// Human-readable name, used in parse diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of input",
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Keyword => "keyword",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Reserved words.
///
/// `Integer` and `String` are type names used in function return-type
/// annotations; `if`, `else` and `for` are reserved but have no grammar yet.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Keyword {
    Let,
    If,
    Else,
    For,
    Func,
    Return,
    Integer,
    String,
}

impl Keyword {
    /// Look up a reserved word. Returns `None` for ordinary identifiers.
    pub fn lookup(text: &str) -> Option<Keyword> {
        match text {
            "let" => Some(Keyword::Let),
            "if" => Some(Keyword::If),
            "else" => Some(Keyword::Else),
            "for" => Some(Keyword::For),
            "func" => Some(Keyword::Func),
            "return" => Some(Keyword::Return),
            "Integer" => Some(Keyword::Integer),
            "String" => Some(Keyword::String),
            _ => None,
        }
    }
}

/// A token: kind, source text and position.
///
/// `line` and `column` are 1-based; `column` counts code points, not bytes.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        line: u32,
        column: u32,
        span: Span,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
            span,
        }
    }

    /// Token without a meaningful position, for tests and parser bootstrapping.
    pub fn dummy(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token::new(kind, lexeme, 0, 0, Span::DUMMY)
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// True for an operator token with exactly this text.
    #[inline]
    pub fn is_operator(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Operator && self.lexeme == symbol
    }

    /// The reserved word this token spells, if it is a keyword token.
    pub fn keyword(&self) -> Option<Keyword> {
        if self.kind == TokenKind::Keyword {
            Keyword::lookup(&self.lexeme)
        } else {
            None
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}({:?}) @ {}:{}",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

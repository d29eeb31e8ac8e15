//! Operators.

use std::fmt;

/// Every operator the lexer can produce.
///
/// Only the four arithmetic operators have evaluation rules; `=` and `==` can
/// still reach the tree in prefix position (`== 3`) and are reported as
/// unknown operators at runtime.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Assign,
    Eq,
}

impl Operator {
    pub fn from_lexeme(lexeme: &str) -> Option<Operator> {
        match lexeme {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "=" => Some(Operator::Assign),
            "==" => Some(Operator::Eq),
            _ => None,
        }
    }

    /// Source-level symbol, used in error messages and tree rendering.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Assign => "=",
            Operator::Eq => "==",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

//! Blue IR - tokens and syntax trees.
//!
//! This crate holds the data shared by every phase of the Blue pipeline:
//! - Spans for source locations
//! - Tokens produced by `blue_lexer`
//! - The AST produced by `blue_parse` and walked by `blue_eval`
//!
//! Every node family is a closed enum. Adding a variant forces each consumer
//! (parser, evaluator, driver) to handle it at compile time.
//!
//! With the `serde` feature enabled, all types implement `serde::Serialize`
//! so the driver can dump token streams and trees as JSON.

pub mod ast;
mod span;
mod token;

pub use ast::{
    AssignmentStatement, BlockStatement, CallExpression, Expr, FunctionLiteral, Identifier,
    InfixExpression, IntegerLiteral, LetStatement, Operator, PrefixExpression, Program,
    ReturnStatement, Stmt,
};
pub use span::Span;
pub use token::{Keyword, Token, TokenKind};

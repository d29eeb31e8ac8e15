#![deny(clippy::arithmetic_side_effects)]
//! Blue Eval - tree-walking interpreter for Blue.
//!
//! Evaluates a parsed [`Program`](blue_ir::Program) directly, node by node.
//!
//! # Architecture
//!
//! - [`Object`]: runtime values. Errors and `return` are ordinary values
//!   ([`Object::Error`], [`Object::ReturnValue`]) rather than panics.
//! - [`Environment`]: a chain of scopes. Each function call gets a fresh
//!   scope whose outer link is the scope the function was declared in.
//! - [`Interpreter`]: the evaluator, carrying the [`CallStack`] that bounds
//!   recursion depth.

mod call_stack;
mod environment;
pub mod errors;
mod interpreter;
mod object;
mod operators;

pub use call_stack::{CallFrame, CallStack};
pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::Interpreter;
pub use object::{FunctionObject, Object};

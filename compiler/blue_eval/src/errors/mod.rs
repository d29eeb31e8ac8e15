//! Evaluation errors.
//!
//! An [`EvalError`] is never raised; the interpreter returns it as an
//! [`Object::Error`](crate::Object::Error) value. The factory functions
//! below are the way to build one.

use blue_ir::Operator;
use thiserror::Error;

use crate::Object;

/// Result of evaluating a node.
///
/// `Err` is the short-circuit path; public entry points turn it back into
/// an `Object::Error` value.
pub type EvalResult = Result<Object, EvalError>;

/// Typed error category. `Display` produces the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefix {
        op: Operator,
        operand: &'static str,
    },

    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfix {
        left: &'static str,
        op: Operator,
        right: &'static str,
    },

    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: &'static str,
        op: Operator,
        right: &'static str,
    },

    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },

    #[error("not a function: {type_name}")]
    NotAFunction { type_name: &'static str },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    #[error("wrong number of arguments: expected {expected}, got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("maximum recursion depth exceeded (limit: {limit})")]
    RecursionLimit { limit: usize },
}

/// A runtime error carried by an `Object::Error`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    /// The user-facing message, e.g. `identifier not found: y`.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

#[cold]
pub fn unknown_prefix(op: Operator, operand: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::UnknownPrefix { op, operand })
}

#[cold]
pub fn unknown_infix(left: &'static str, op: Operator, right: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::UnknownInfix { left, op, right })
}

/// Operands of a binary operator are not both integers.
#[cold]
pub fn type_mismatch(left: &'static str, op: Operator, right: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::TypeMismatch { left, op, right })
}

#[cold]
pub fn identifier_not_found(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::IdentifierNotFound {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_a_function(type_name: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::NotAFunction { type_name })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::new(EvalErrorKind::RecursionLimit { limit })
}

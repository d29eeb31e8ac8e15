//! Runtime values.

use std::fmt;
use std::rc::Rc;

use blue_ir::FunctionLiteral;

use crate::{Environment, EvalError};

/// A value produced by evaluation.
///
/// There is no implicit conversion between variants; every operator checks
/// the variants it receives.
#[derive(Clone, Debug, PartialEq)]
pub enum Object {
    Integer(i64),
    Null,
    /// A runtime error travelling as a value.
    Error(EvalError),
    Function(FunctionObject),
    /// Wraps the value of a `return` until it reaches a function boundary
    /// or the top of the program.
    ReturnValue(Box<Object>),
}

impl Object {
    /// Type tag used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Null => "NULL",
            Object::Error(_) => "ERROR",
            Object::Function(_) => "FUNCTION",
            Object::ReturnValue(_) => "RETURN_VALUE",
        }
    }

    /// Render the value for display to a user.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// Strip one `ReturnValue` wrapper, if present.
    pub fn unwrap_return(self) -> Object {
        match self {
            Object::ReturnValue(value) => *value,
            other => other,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{value}"),
            Object::Null => f.write_str("null"),
            Object::Error(error) => write!(f, "ERROR: {error}"),
            Object::Function(function) => write!(f, "{}", function.literal),
            Object::ReturnValue(value) => write!(f, "{value}"),
        }
    }
}

impl From<EvalError> for Object {
    fn from(error: EvalError) -> Self {
        Object::Error(error)
    }
}

/// A function value: its declaration plus the scope it was declared in.
#[derive(Clone)]
pub struct FunctionObject {
    pub literal: Rc<FunctionLiteral>,
    pub env: Environment,
}

impl FunctionObject {
    pub fn new(literal: Rc<FunctionLiteral>, env: Environment) -> Self {
        FunctionObject { literal, env }
    }

    pub fn name(&self) -> &str {
        &self.literal.name.name
    }

    pub fn arity(&self) -> usize {
        self.literal.parameters.len()
    }
}

/// Identity: same declaration captured in the same scope.
impl PartialEq for FunctionObject {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.literal, &other.literal) && self.env.ptr_eq(&other.env)
    }
}

// A function bound in its own scope is reachable from that scope, so the
// derived Debug would never terminate.
impl fmt::Debug for FunctionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionObject")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}

//! Tree-walking interpreter.
//!
//! Internally every node evaluates to an [`EvalResult`] so errors
//! short-circuit with `?`. The public `eval_*` methods fold `Err` back into
//! an [`Object::Error`] value.
//!
//! `return` is not an error: it produces an [`Object::ReturnValue`] that
//! blocks pass up unchanged until a function call (or the program) unwraps it.

use std::rc::Rc;

use blue_ir::{
    AssignmentStatement, BlockStatement, CallExpression, Expr, FunctionLiteral, Identifier,
    Program, Stmt,
};
use blue_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::errors::{arity_mismatch, identifier_not_found, not_a_function};
use crate::operators::{evaluate_infix, evaluate_prefix};
use crate::{CallFrame, CallStack, Environment, EvalResult, FunctionObject, Object};

/// The evaluator.
pub struct Interpreter {
    call_stack: CallStack,
}

impl Interpreter {
    /// Call depth allowed by [`Interpreter::new`].
    pub const DEFAULT_MAX_DEPTH: usize = 10_000;

    pub fn new() -> Self {
        Self::with_max_depth(Self::DEFAULT_MAX_DEPTH)
    }

    /// Interpreter whose calls may nest at most `max_depth` deep.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Interpreter {
            call_stack: CallStack::new(Some(max_depth)),
        }
    }

    /// Interpreter with no call-depth limit.
    pub fn unbounded() -> Self {
        Interpreter {
            call_stack: CallStack::new(None),
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.call_stack.max_depth()
    }

    /// Run a program in `env`.
    ///
    /// Statements run in order. The first error stops the program and is
    /// the result; a top-level `return` stops it and yields the returned
    /// value. Otherwise the result is the last statement's value, or `Null`
    /// for an empty program.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&mut self, program: &Program, env: &Environment) -> Object {
        let mut result = Object::Null;
        for stmt in &program.statements {
            match self.eval_stmt(stmt, env) {
                Ok(Object::ReturnValue(value)) => return *value,
                Ok(value) => result = value,
                Err(error) => {
                    debug!(%error, "program stopped");
                    return Object::Error(error);
                }
            }
        }
        result
    }

    /// Evaluate one statement. A `return` statement yields an unopened
    /// `ReturnValue`.
    pub fn eval_statement(&mut self, stmt: &Stmt, env: &Environment) -> Object {
        self.eval_stmt(stmt, env).unwrap_or_else(Object::Error)
    }

    pub fn eval_expression(&mut self, expr: &Expr, env: &Environment) -> Object {
        self.eval_expr(expr, env).unwrap_or_else(Object::Error)
    }

    fn eval_stmt(&mut self, stmt: &Stmt, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| -> EvalResult {
            match stmt {
                Stmt::Let(let_stmt) => self.eval_binding(&let_stmt.assignment, env),
                Stmt::Assign(assignment) => self.eval_binding(assignment, env),
                Stmt::Return(ret) => {
                    let value = self.eval_expr(&ret.value, env)?;
                    Ok(Object::ReturnValue(Box::new(value)))
                }
                Stmt::Function(literal) => Ok(Self::declare_function(literal, env)),
                Stmt::Expr(expr) => self.eval_expr(expr, env),
            }
        })
    }

    /// `let` and plain assignment both bind in the current scope.
    fn eval_binding(&mut self, assignment: &AssignmentStatement, env: &Environment) -> EvalResult {
        let value = self.eval_expr(&assignment.value, env)?;
        trace!(name = %assignment.name, value = %value, "bind");
        env.set(assignment.name.name.as_str(), value.clone());
        Ok(value)
    }

    /// Capture `env` and bind the function under its own name, which makes
    /// recursion possible.
    fn declare_function(literal: &Rc<FunctionLiteral>, env: &Environment) -> Object {
        trace!(name = %literal.name, "declare");
        env.declare(literal)
    }

    /// Statements in order, stopping at the first `ReturnValue`. The
    /// wrapper is left on so it reaches the enclosing call.
    fn eval_block(&mut self, block: &BlockStatement, env: &Environment) -> EvalResult {
        let mut result = Object::Null;
        for stmt in &block.statements {
            result = self.eval_stmt(stmt, env)?;
            if matches!(result, Object::ReturnValue(_)) {
                break;
            }
        }
        Ok(result)
    }

    fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| -> EvalResult {
            match expr {
                Expr::Int(lit) => Ok(Object::Integer(lit.value)),
                Expr::Ident(ident) => Self::eval_identifier(ident, env),
                Expr::Prefix(prefix) => {
                    let operand = self.eval_expr(&prefix.operand, env)?;
                    evaluate_prefix(prefix.op, &operand)
                }
                Expr::Infix(infix) => {
                    let left = self.eval_expr(&infix.left, env)?;
                    let right = self.eval_expr(&infix.right, env)?;
                    evaluate_infix(infix.op, &left, &right)
                }
                Expr::Call(call) => self.eval_call(call, env),
            }
        })
    }

    fn eval_identifier(ident: &Identifier, env: &Environment) -> EvalResult {
        match env.get(&ident.name) {
            // an error value bound by the host still short-circuits
            Some(Object::Error(error)) => Err(error),
            Some(value) => Ok(value),
            None => Err(identifier_not_found(&ident.name)),
        }
    }

    fn eval_call(&mut self, call: &CallExpression, env: &Environment) -> EvalResult {
        let callee = self.eval_expr(&call.callee, env)?;
        let function = match callee {
            Object::Function(function) => function,
            other => return Err(not_a_function(other.type_name())),
        };
        let arguments = call
            .arguments
            .iter()
            .map(|arg| self.eval_expr(arg, env))
            .collect::<Result<Vec<_>, _>>()?;
        self.apply_function(&function, arguments)
    }

    /// Call `function` with already-evaluated arguments.
    ///
    /// The body runs in a fresh scope enclosing the function's captured
    /// scope, never the caller's.
    #[tracing::instrument(level = "debug", skip_all, fields(function = function.name()))]
    fn apply_function(&mut self, function: &FunctionObject, arguments: Vec<Object>) -> EvalResult {
        if arguments.len() != function.arity() {
            return Err(arity_mismatch(
                function.name(),
                function.arity(),
                arguments.len(),
            ));
        }

        if let Err(error) = self.call_stack.push(CallFrame::new(function.name())) {
            let innermost: Vec<&str> = self.call_stack.backtrace().into_iter().take(4).collect();
            debug!(depth = self.call_stack.depth(), ?innermost, "recursion limit reached");
            return Err(error);
        }

        let call_env = Environment::enclosed(&function.env);
        for (param, value) in function.literal.parameters.iter().zip(arguments) {
            call_env.set(param.name.as_str(), value);
        }
        let result = self.eval_block(&function.literal.body, &call_env);
        self.call_stack.pop();

        result.map(Object::unwrap_return)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::errors::{division_by_zero, EvalError, EvalErrorKind};
use blue_ir::Operator;
use blue_parse::parse;
use pretty_assertions::assert_eq;

fn program(source: &str) -> Program {
    let output = parse(source);
    assert_eq!(output.errors, vec![], "parse errors in {source:?}");
    output.program
}

#[test]
fn empty_program_is_null() {
    let mut interp = Interpreter::new();
    assert_eq!(
        interp.eval_program(&Program::default(), &Environment::new()),
        Object::Null
    );
}

#[test]
fn let_binds_and_yields_value() {
    let env = Environment::new();
    let result = Interpreter::new().eval_program(&program("let x = 3 + 4;"), &env);
    assert_eq!(result, Object::Integer(7));
    assert_eq!(env.get("x"), Some(Object::Integer(7)));
}

#[test]
fn error_leaves_binding_untouched() {
    let env = Environment::new();
    env.set("a", Object::Integer(1));
    let result = Interpreter::new().eval_program(&program("a = missing"), &env);
    assert!(result.is_error());
    assert_eq!(env.get("a"), Some(Object::Integer(1)));
}

#[test]
fn return_statement_is_wrapped() {
    let env = Environment::new();
    let stmt = Stmt::return_(Expr::int(5));
    assert_eq!(
        Interpreter::new().eval_statement(&stmt, &env),
        Object::ReturnValue(Box::new(Object::Integer(5)))
    );
}

#[test]
fn top_level_return_stops_and_unwraps() {
    let env = Environment::new();
    let result = Interpreter::new().eval_program(&program("return 5; x = 10"), &env);
    assert_eq!(result, Object::Integer(5));
    assert_eq!(env.get("x"), None);
}

#[test]
fn eval_expression_folds_errors() {
    let env = Environment::new();
    let expr = Expr::infix(Operator::Eq, Expr::int(1), Expr::int(1));
    let result = Interpreter::new().eval_expression(&expr, &env);
    assert_eq!(result.inspect(), "ERROR: unknown operator: INTEGER == INTEGER");
}

#[test]
fn bound_error_values_propagate() {
    let env = Environment::new();
    env.set("e", Object::Error(division_by_zero()));
    let expr = Expr::infix(Operator::Add, Expr::ident("e"), Expr::int(1));
    assert_eq!(
        Interpreter::new().eval_expression(&expr, &env),
        Object::Error(division_by_zero())
    );
}

#[test]
fn function_declaration_binds_its_name() {
    let env = Environment::new();
    let result = Interpreter::new().eval_program(&program("func Integer f() { }"), &env);
    assert_eq!(result.type_name(), "FUNCTION");
    assert_eq!(env.get("f"), Some(result.clone()));
    assert_eq!(result.inspect(), "func Integer f() { }");
}

#[test]
fn function_captures_declaring_scope() {
    let env = Environment::new();
    Interpreter::new().eval_program(&program("func Integer f() { }"), &env);
    let Some(Object::Function(function)) = env.get("f") else {
        panic!("f should be a function");
    };
    assert!(function.env.ptr_eq(&env));
}

#[test]
fn call_bindings_stay_in_call_scope() {
    let env = Environment::new();
    let source = "func Integer f(p) { local = p; return local; } f(3)";
    let result = Interpreter::new().eval_program(&program(source), &env);
    assert_eq!(result, Object::Integer(3));
    assert_eq!(env.get("p"), None);
    assert_eq!(env.get("local"), None);
}

#[test]
fn call_scope_with_inner_function_is_freed() {
    let env = Environment::new();
    let mut interp = Interpreter::new();
    let source = "func Integer adder(x) { func Integer add(y) { return x + y; } return add; } \
                  inc = adder(1)";
    interp.eval_program(&program(source), &env);

    let Some(Object::Function(inc)) = env.get("inc") else {
        panic!("inc should be a function");
    };
    let call_scope = inc.env.downgrade();
    assert!(!inc.env.ptr_eq(&env));
    assert_eq!(
        interp.eval_program(&program("inc(41)"), &env),
        Object::Integer(42)
    );

    // the returned closure is the only thing keeping the call scope alive
    env.set("inc", Object::Null);
    assert!(call_scope.upgrade().is_some());
    drop(inc);
    assert!(call_scope.upgrade().is_none());
}

#[test]
fn inner_declarations_stay_in_call_scope() {
    let env = Environment::new();
    let mut interp = Interpreter::new();
    let source = "func Integer outer(n) { func Integer inner() { return n; } return inner(); } \
                  outer(7)";
    assert_eq!(interp.eval_program(&program(source), &env), Object::Integer(7));

    let Some(Object::Function(outer)) = env.get("outer") else {
        panic!("outer should be a function");
    };
    // only the top-level scope stays reachable from the declaration
    assert!(outer.env.ptr_eq(&env));
    assert_eq!(env.local_names(), vec!["outer".to_string()]);
}

#[test]
fn call_stack_unwinds_after_errors() {
    let env = Environment::new();
    let mut interp = Interpreter::with_max_depth(16);
    let source = "func Integer down(n) { return down(n); } down(1)";
    let result = interp.eval_program(&program(source), &env);
    assert_eq!(
        result,
        Object::Error(EvalError::new(EvalErrorKind::RecursionLimit { limit: 16 }))
    );
    assert_eq!(interp.call_stack.depth(), 0);

    // the same interpreter keeps working
    let result = interp.eval_program(&program("func Integer one() { return 1; } one()"), &env);
    assert_eq!(result, Object::Integer(1));
}

#[test]
fn limits() {
    assert_eq!(
        Interpreter::new().max_depth(),
        Some(Interpreter::DEFAULT_MAX_DEPTH)
    );
    assert_eq!(Interpreter::with_max_depth(3).max_depth(), Some(3));
    assert_eq!(Interpreter::unbounded().max_depth(), None);
}

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn set_then_get() {
    let env = Environment::new();
    env.set("x", Object::Integer(7));
    assert_eq!(env.get("x"), Some(Object::Integer(7)));
    assert_eq!(env.get("y"), None);
}

#[test]
fn set_replaces_existing_binding() {
    let env = Environment::new();
    env.set("x", Object::Integer(1));
    env.set("x", Object::Integer(2));
    assert_eq!(env.get("x"), Some(Object::Integer(2)));
    assert_eq!(env.local_names(), vec!["x".to_string()]);
}

#[test]
fn lookup_walks_outward() {
    let global = Environment::new();
    global.set("a", Object::Integer(1));
    let middle = Environment::enclosed(&global);
    middle.set("b", Object::Integer(2));
    let inner = Environment::enclosed(&middle);

    assert_eq!(inner.get("a"), Some(Object::Integer(1)));
    assert_eq!(inner.get("b"), Some(Object::Integer(2)));
    assert_eq!(inner.get("c"), None);
}

#[test]
fn inner_binding_shadows_without_touching_outer() {
    let outer = Environment::new();
    outer.set("x", Object::Integer(1));
    let inner = Environment::enclosed(&outer);
    inner.set("x", Object::Integer(2));

    assert_eq!(inner.get("x"), Some(Object::Integer(2)));
    assert_eq!(outer.get("x"), Some(Object::Integer(1)));
    assert_eq!(inner.local_names(), vec!["x".to_string()]);
    assert!(Environment::enclosed(&outer).local_names().is_empty());
}

#[test]
fn clones_share_the_scope() {
    let env = Environment::new();
    let alias = env.clone();
    alias.set("x", Object::Null);
    assert_eq!(env.get("x"), Some(Object::Null));
    assert!(env.ptr_eq(&alias));
    assert!(!env.ptr_eq(&Environment::new()));
}

#[test]
fn later_outer_bindings_are_visible() {
    let outer = Environment::new();
    let inner = Environment::enclosed(&outer);
    outer.set("late", Object::Integer(3));
    assert_eq!(inner.get("late"), Some(Object::Integer(3)));
}

fn literal(source: &str) -> Rc<FunctionLiteral> {
    match blue_parse::parse(source).program.statements.into_iter().next() {
        Some(blue_ir::Stmt::Function(literal)) => literal,
        other => panic!("expected a function declaration, got {other:?}"),
    }
}

#[test]
fn declared_function_captures_its_scope() {
    let env = Environment::new();
    let literal = literal("func Integer g() { 1 }");
    let declared = env.declare(&literal);

    let Some(Object::Function(found)) = env.get("g") else {
        panic!("g should be bound");
    };
    assert!(found.env.ptr_eq(&env));
    assert!(Rc::ptr_eq(&found.literal, &literal));
    assert_eq!(Some(declared), env.get("g"));

    // visible from nested scopes, still closing over the declaring scope
    let inner = Environment::enclosed(&env);
    let Some(Object::Function(through_inner)) = inner.get("g") else {
        panic!("g should be visible from an inner scope");
    };
    assert!(through_inner.env.ptr_eq(&env));
}

#[test]
fn set_replaces_a_declaration() {
    let env = Environment::new();
    env.declare(&literal("func Integer g() { 1 }"));
    env.set("g", Object::Integer(2));
    assert_eq!(env.get("g"), Some(Object::Integer(2)));
}

#[test]
fn scope_declaring_a_function_is_freed() {
    let outer = Environment::new();
    let scope = Environment::enclosed(&outer);
    let weak = scope.downgrade();
    let declared = scope.declare(&literal("func Integer g() { 1 }"));

    // the function value itself keeps the scope alive
    drop(scope);
    assert!(weak.upgrade().is_some());

    drop(declared);
    assert!(weak.upgrade().is_none());
}

#[test]
fn plain_scope_is_freed() {
    let outer = Environment::new();
    let scope = Environment::enclosed(&outer);
    scope.set("x", Object::Integer(1));
    let weak = scope.downgrade();
    drop(scope);
    assert!(weak.upgrade().is_none());
}

#[test]
fn debug_lists_names_only() {
    let env = Environment::new();
    env.set("b", Object::Integer(1));
    env.set("a", Object::Integer(2));
    assert_eq!(
        format!("{env:?}"),
        r#"Environment { names: ["a", "b"], has_outer: false }"#
    );
}

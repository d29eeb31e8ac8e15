use super::*;
use pretty_assertions::assert_eq;

#[test]
fn infix_renders_fully_parenthesised() {
    let expr = Expr::infix(
        Operator::Sub,
        Expr::infix(Operator::Sub, Expr::int(5), Expr::int(2)),
        Expr::int(1),
    );
    assert_eq!(expr.to_string(), "((5 - 2) - 1)");
}

#[test]
fn prefix_and_call_render() {
    let expr = Expr::prefix(
        Operator::Sub,
        Expr::call(Expr::ident("add"), vec![Expr::int(2), Expr::ident("b")]),
    );
    assert_eq!(expr.to_string(), "(-add(2, b))");
}

#[test]
fn statements_render_with_terminators() {
    let program = Program::new(vec![
        Stmt::let_("x", Expr::int(7)),
        Stmt::assign("y", Expr::ident("x")),
        Stmt::Expr(Expr::call(Expr::ident("f"), vec![])),
    ]);
    assert_eq!(program.to_string(), "let x = 7;\ny = x;\nf();");
}

#[test]
fn function_renders_signature_and_body() {
    let func = FunctionLiteral {
        return_type: "Integer".to_string(),
        name: Identifier::new("add"),
        parameters: vec![Identifier::new("a"), Identifier::new("b")],
        body: BlockStatement {
            statements: vec![Stmt::return_(Expr::infix(
                Operator::Add,
                Expr::ident("a"),
                Expr::ident("b"),
            ))],
        },
    };
    assert_eq!(
        Stmt::Function(Rc::new(func)).to_string(),
        "func Integer add(a, b) { return (a + b); }"
    );
}

#[test]
fn empty_block_renders_braces() {
    assert_eq!(BlockStatement::default().to_string(), "{ }");
}

#[test]
fn operator_lexemes_are_closed() {
    for op in [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Assign,
        Operator::Eq,
    ] {
        assert_eq!(Operator::from_lexeme(op.as_symbol()), Some(op));
    }
    assert_eq!(Operator::from_lexeme("%"), None);
    assert_eq!(Operator::from_lexeme("!="), None);
}

#[test]
fn deep_trees_drop_without_recursion() {
    let mut prefix = Expr::int(1);
    let mut infix = Expr::int(1);
    let mut calls = Expr::ident("f");
    for _ in 0..200_000 {
        prefix = Expr::prefix(Operator::Sub, prefix);
        infix = Expr::infix(Operator::Add, infix, Expr::int(1));
        calls = Expr::call(calls, vec![Expr::int(2)]);
    }
    drop(prefix);
    drop(infix);
    drop(calls);
}

#[test]
fn deep_trees_render() {
    let mut expr = Expr::int(1);
    for _ in 0..50_000 {
        expr = Expr::prefix(Operator::Sub, expr);
    }
    let rendered = expr.to_string();
    assert!(rendered.starts_with("(-(-"));
    assert_eq!(rendered.len(), 1 + 50_000 * 3);
}

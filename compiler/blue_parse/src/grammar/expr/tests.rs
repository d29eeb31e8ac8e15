#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::parse;
use blue_ir::Stmt;
use pretty_assertions::assert_eq;

/// Parse `source` as a single expression statement and render it.
fn render(source: &str) -> String {
    let output = parse(source);
    assert_eq!(output.errors, vec![], "unexpected errors for {source:?}");
    assert_eq!(output.program.statements.len(), 1, "{source:?}");
    match &output.program.statements[0] {
        Stmt::Expr(expr) => expr.to_string(),
        other => panic!("expected expression statement, got {other:?}"),
    }
}

#[test]
fn precedence_ordering() {
    assert!(Precedence::Lowest < Precedence::Sum);
    assert!(Precedence::Sum < Precedence::Product);
    assert!(Precedence::Product < Precedence::Prefix);
    assert!(Precedence::Prefix < Precedence::Call);
}

#[test]
fn operator_binding_powers() {
    let op = |s: &str| Token::dummy(TokenKind::Operator, s);
    assert_eq!(Precedence::of(&op("+")), Precedence::Sum);
    assert_eq!(Precedence::of(&op("-")), Precedence::Sum);
    assert_eq!(Precedence::of(&op("*")), Precedence::Product);
    assert_eq!(Precedence::of(&op("/")), Precedence::Product);
    assert_eq!(Precedence::of(&op("=")), Precedence::Lowest);
    assert_eq!(Precedence::of(&op("==")), Precedence::Lowest);
    assert_eq!(
        Precedence::of(&Token::dummy(TokenKind::LParen, "(")),
        Precedence::Call
    );
    assert_eq!(
        Precedence::of(&Token::dummy(TokenKind::Semicolon, ";")),
        Precedence::Lowest
    );
}

#[test]
fn same_level_operators_associate_left() {
    assert_eq!(render("5 - 2 - 1"), "((5 - 2) - 1)");
    assert_eq!(render("8 / 4 / 2"), "((8 / 4) / 2)");
    assert_eq!(render("a + b - c"), "((a + b) - c)");
}

#[test]
fn product_binds_tighter_than_sum() {
    assert_eq!(render("a + b * c"), "(a + (b * c))");
    assert_eq!(render("a * b + c"), "((a * b) + c)");
    assert_eq!(render("a + b * c - d / e"), "((a + (b * c)) - (d / e))");
}

#[test]
fn prefix_binds_tighter_than_product() {
    assert_eq!(render("-a * b"), "((-a) * b)");
    assert_eq!(render("a * -b"), "(a * (-b))");
    assert_eq!(render("--5"), "(-(-5))");
}

#[test]
fn calls_bind_tightest() {
    assert_eq!(render("add(2, 3)"), "add(2, 3)");
    assert_eq!(render("f()"), "f()");
    assert_eq!(render("-f(x)"), "(-f(x))");
    assert_eq!(render("f(a + b, g(c)) * 2"), "(f((a + b), g(c)) * 2)");
    assert_eq!(render("make()(1)"), "make()(1)");
}

#[test]
fn call_builds_call_node() {
    let output = parse("add(2, 3)");
    assert_eq!(
        output.program.statements,
        vec![Stmt::Expr(Expr::call(
            Expr::ident("add"),
            vec![Expr::int(2), Expr::int(3)]
        ))]
    );
}

#[test]
fn semicolon_stops_the_expression() {
    let output = parse("a; + b");
    assert_eq!(output.program.to_string(), "a;\n(+b);");
}

#[test]
fn equality_is_not_an_infix_operator() {
    // `==` has the lowest binding power, so `a` ends the first statement.
    let output = parse("a == b");
    assert_eq!(output.program.to_string(), "a;\n(==b);");
}

#[test]
fn integer_out_of_range_drops_the_expression() {
    let output = parse("99999999999999999999");
    assert!(output.program.is_empty());
    assert_eq!(
        output.errors[0].kind,
        ParseErrorKind::IntegerOutOfRange {
            lexeme: "99999999999999999999".to_string()
        }
    );
}

#[test]
fn largest_integer_parses() {
    assert_eq!(render("9223372036854775807"), "9223372036854775807");
}

#[test]
fn missing_operand_drops_the_whole_expression() {
    let output = parse("x = 1 + ;");
    assert!(output.program.is_empty());
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].message(), "expected an expression, found `;`");
}

#[test]
fn unclosed_call_is_reported() {
    let output = parse("f(1, 2");
    assert!(output.program.is_empty());
    assert_eq!(
        output.errors[0].message(),
        "expected `)` after arguments, found end of input"
    );
}

#[test]
fn deep_prefix_nesting() {
    let depth = 200_000;
    let source = format!("{}1", "-".repeat(depth));
    let output = parse(&source);
    assert_eq!(output.errors, vec![]);

    let Some(Stmt::Expr(expr)) = output.program.statements.first() else {
        panic!("expected expression statement");
    };
    let mut seen = 0;
    let mut current = expr;
    while let Expr::Prefix(prefix) = current {
        seen += 1;
        current = &prefix.operand;
    }
    assert_eq!(seen, depth);
    assert_eq!(current, &Expr::int(1));

    // dropping the whole chain must not exhaust the stack either
    drop(output);
}

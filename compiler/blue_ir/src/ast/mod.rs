//! Syntax tree.
//!
//! The tree is owned top-down: statements own their expressions, expressions
//! own their operands. The one exception is [`FunctionLiteral`], held behind
//! an `Rc` so a runtime function value can refer to its declaration without
//! copying the body.
//!
//! Every node implements `Display`, rendering fully parenthesised source text
//! (`x = ((5 - 2) - 1);`). Parser tests compare against these renderings.

mod operators;

use std::fmt;
use std::rc::Rc;

use blue_stack::ensure_sufficient_stack;

pub use operators::Operator;

/// Root of every parse: the top-level statements in source order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Statements.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Stmt {
    /// `let x = expr;`
    Let(LetStatement),
    /// `x = expr;` (binds in the current scope, same as `let`)
    Assign(AssignmentStatement),
    /// `return expr;`
    Return(ReturnStatement),
    /// `func Integer name(a, b) { ... }`
    Function(Rc<FunctionLiteral>),
    /// A bare expression: `add(2, 3);`
    Expr(Expr),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LetStatement {
    pub assignment: AssignmentStatement,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AssignmentStatement {
    pub name: Identifier,
    pub value: Expr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReturnStatement {
    pub value: Expr,
}

/// A named function with a return-type annotation.
///
/// The annotation is kept verbatim (`Integer`, `String`, or whatever token
/// followed `func`); nothing checks it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FunctionLiteral {
    pub return_type: String,
    pub name: Identifier,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

/// `{ stmt* }`. The body of a function and the unit of return propagation.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlockStatement {
    pub statements: Vec<Stmt>,
}

/// Expressions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expr {
    Ident(Identifier),
    Int(IntegerLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    Call(CallExpression),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IntegerLiteral {
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrefixExpression {
    pub op: Operator,
    pub operand: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InfixExpression {
    pub op: Operator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CallExpression {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

// Constructors used by the parser and by tests building expected trees.

impl Expr {
    pub fn ident(name: impl Into<String>) -> Expr {
        Expr::Ident(Identifier::new(name))
    }

    pub fn int(value: i64) -> Expr {
        Expr::Int(IntegerLiteral { value })
    }

    pub fn prefix(op: Operator, operand: Expr) -> Expr {
        Expr::Prefix(PrefixExpression {
            op,
            operand: Box::new(operand),
        })
    }

    pub fn infix(op: Operator, left: Expr, right: Expr) -> Expr {
        Expr::Infix(InfixExpression {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn call(callee: Expr, arguments: Vec<Expr>) -> Expr {
        Expr::Call(CallExpression {
            callee: Box::new(callee),
            arguments,
        })
    }
}

impl Stmt {
    pub fn assign(name: impl Into<String>, value: Expr) -> Stmt {
        Stmt::Assign(AssignmentStatement {
            name: Identifier::new(name),
            value,
        })
    }

    pub fn let_(name: impl Into<String>, value: Expr) -> Stmt {
        Stmt::Let(LetStatement {
            assignment: AssignmentStatement {
                name: Identifier::new(name),
                value,
            },
        })
    }

    pub fn return_(value: Expr) -> Stmt {
        Stmt::Return(ReturnStatement { value })
    }
}

// Operand chains can be hundreds of thousands of nodes deep; the derived
// drop would recurse once per level. Detach children onto a work list so
// every node is dropped with empty boxes.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

impl Expr {
    fn take_children(&mut self, out: &mut Vec<Expr>) {
        let detach = |slot: &mut Box<Expr>| std::mem::replace(slot.as_mut(), Expr::int(0));
        match self {
            Expr::Ident(_) | Expr::Int(_) => {}
            Expr::Prefix(prefix) => out.push(detach(&mut prefix.operand)),
            Expr::Infix(infix) => {
                out.push(detach(&mut infix.left));
                out.push(detach(&mut infix.right));
            }
            Expr::Call(call) => {
                out.push(detach(&mut call.callee));
                out.append(&mut call.arguments);
            }
        }
    }
}

// Rendering

fn write_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    sep: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated(f, &self.statements, "\n")
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(s) => write!(f, "{s}"),
            Stmt::Assign(s) => write!(f, "{s};"),
            Stmt::Return(s) => write!(f, "{s}"),
            Stmt::Function(func) => write!(f, "{func}"),
            Stmt::Expr(e) => write!(f, "{e};"),
        }
    }
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "let {};", self.assignment)
    }
}

impl fmt::Display for AssignmentStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "return {};", self.value)
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "func {} {}(", self.return_type, self.name)?;
        write_separated(f, &self.parameters, ", ")?;
        write!(f, ") {}", self.body)
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{ ")?;
        write_separated(f, &self.statements, " ")?;
        f.write_str(" }")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Ident(ident) => write!(f, "{ident}"),
            Expr::Int(lit) => write!(f, "{}", lit.value),
            Expr::Prefix(p) => write!(f, "({}{})", p.op, p.operand),
            Expr::Infix(i) => write!(f, "({} {} {})", i.left, i.op, i.right),
            Expr::Call(c) => {
                write!(f, "{}(", c.callee)?;
                write_separated(f, &c.arguments, ", ")?;
                f.write_str(")")
            }
        })
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests;

//! Operator implementations.
//!
//! Integers are the only operand type with arithmetic. All arithmetic is
//! checked: overflow and division by zero become errors, never wrap or panic.

use blue_ir::Operator;

use crate::errors::{
    division_by_zero, integer_overflow, type_mismatch, unknown_infix, unknown_prefix,
};
use crate::{EvalResult, Object};

/// Apply a prefix operator. Only `-` on an integer is defined.
pub(crate) fn evaluate_prefix(op: Operator, operand: &Object) -> EvalResult {
    match (op, operand) {
        (Operator::Sub, Object::Integer(value)) => value
            .checked_neg()
            .map(Object::Integer)
            .ok_or_else(|| integer_overflow("negation")),
        _ => Err(unknown_prefix(op, operand.type_name())),
    }
}

/// Apply a binary operator. Both operands must be integers.
pub(crate) fn evaluate_infix(op: Operator, left: &Object, right: &Object) -> EvalResult {
    match (left, right) {
        (Object::Integer(l), Object::Integer(r)) => evaluate_integer(op, *l, *r),
        _ => Err(type_mismatch(left.type_name(), op, right.type_name())),
    }
}

#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result
        .map(Object::Integer)
        .ok_or_else(|| integer_overflow(op_name))
}

fn evaluate_integer(op: Operator, l: i64, r: i64) -> EvalResult {
    match op {
        Operator::Add => checked_arith(l.checked_add(r), "addition"),
        Operator::Sub => checked_arith(l.checked_sub(r), "subtraction"),
        Operator::Mul => checked_arith(l.checked_mul(r), "multiplication"),
        Operator::Div => {
            if r == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(l.checked_div(r), "division")
            }
        }
        Operator::Assign | Operator::Eq => Err(unknown_infix("INTEGER", op, "INTEGER")),
    }
}

//! Binary operator implementations for the evaluator.
//!
//! Direct `match` dispatch on `BinaryOp`. All arithmetic is checked; `&`
//! and `|` share the addition and multiplication paths.

use brim_ir::{BinaryOp, Span};

use crate::{EvalError, EvalResult};

/// Checked arithmetic where the only error case is overflow.
#[inline]
fn checked_arith(result: Option<i64>, op: BinaryOp, span: Span) -> EvalResult {
    result.ok_or(EvalError::IntegerOverflow { op, span })
}

/// Checked division with zero guard.
///
/// Truncates toward zero. `i64::MIN / -1` is reported as overflow.
#[inline]
fn checked_div(left: i64, right: i64, span: Span) -> EvalResult {
    if right == 0 {
        Err(EvalError::DivisionByZero { span })
    } else {
        checked_arith(left.checked_div(right), BinaryOp::Div, span)
    }
}

/// Apply `op` to two evaluated operands.
///
/// `span` is the span of the `Binary` node, used for error reporting.
pub fn evaluate_binary(op: BinaryOp, left: i64, right: i64, span: Span) -> EvalResult {
    match op {
        BinaryOp::Add | BinaryOp::And => checked_arith(left.checked_add(right), op, span),
        BinaryOp::Sub => checked_arith(left.checked_sub(right), op, span),
        BinaryOp::Mul | BinaryOp::Or => checked_arith(left.checked_mul(right), op, span),
        BinaryOp::Div => checked_div(left, right, span),
        BinaryOp::Gt => Ok(i64::from(left > right)),
    }
}

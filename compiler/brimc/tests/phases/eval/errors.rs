use brim_eval::EvalError;
use brim_ir::BinaryOp;
use brimc::{Dialect, Error, Stage};
use pretty_assertions::assert_eq;

use crate::common::fails_at;

#[test]
fn test_division_by_zero() {
    let err = fails_at("5/0", Dialect::Arithmetic, Stage::Eval);
    assert!(matches!(err, Error::Arithmetic(EvalError::DivisionByZero { .. })));
    assert_eq!(err.to_string(), "1:1: division by zero");
}

#[test]
fn test_division_by_computed_zero() {
    fails_at("x = 3 ; y = 1 / (x - 3) ;", Dialect::Block, Stage::Eval);
}

#[test]
fn test_overflow() {
    let err = fails_at("9223372036854775807 + 1", Dialect::Arithmetic, Stage::Eval);
    assert!(matches!(
        err,
        Error::Arithmetic(EvalError::IntegerOverflow {
            op: BinaryOp::Add,
            ..
        })
    ));
}

#[test]
fn test_min_over_minus_one() {
    let err = fails_at(
        "m = 0 - 9223372036854775807 - 1 ; q = m / (0 - 1) ;",
        Dialect::Block,
        Stage::Eval,
    );
    assert_eq!(
        err.to_string(),
        "1:39: integer overflow in division"
    );
}

#[test]
fn test_literal_out_of_range_is_a_parse_error() {
    fails_at("x = 9223372036854775808 ;", Dialect::Block, Stage::Parse);
}

#[test]
fn test_error_inside_untaken_branch_is_ignored() {
    let env = brimc::execute("if (0) { x = 1 / 0 ; }").unwrap();
    assert!(env.is_empty());
}

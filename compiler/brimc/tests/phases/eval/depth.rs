//! Inputs whose trees are as deep as the input is long.
//!
//! Each run builds, evaluates and drops the whole tree.

use brimc::{Dialect, Session};
use pretty_assertions::assert_eq;

use crate::common::{bindings, pairs};

#[test]
fn test_flat_chain_of_additions() {
    let source = vec!["1"; 100_000].join("+");
    assert_eq!(brimc::evaluate(&source).unwrap(), 100_000);
}

#[test]
fn test_flat_chain_with_mixed_tiers() {
    let source = vec!["2*3"; 100_000].join("-");
    assert_eq!(brimc::evaluate(&source).unwrap(), 6 - 6 * 99_999);
}

#[test]
fn test_nested_if_blocks() {
    let depth = 100_000;
    let source = format!(
        "{}total = total + 1 ;{}",
        "if (1) { ".repeat(depth),
        " }".repeat(depth)
    );
    assert_eq!(bindings(&source), pairs(&[("total", 1)]));
}

#[test]
fn test_deep_tree_dropped_after_error() {
    let source = format!("{}+1/0", vec!["1"; 100_000].join("+"));
    let err = Session::new(Dialect::Arithmetic)
        .run_source(&source)
        .unwrap_err();
    assert_eq!(err.stage(), brimc::Stage::Eval);
}

#[test]
fn test_deep_tree_parse_only() {
    let source = vec!["x"; 100_000].join("|");
    let tree = brimc::parse_source(&source, Dialect::Arithmetic).unwrap();
    assert_eq!(tree.node_count(), 199_999);
}

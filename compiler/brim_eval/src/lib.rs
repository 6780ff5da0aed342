#![deny(clippy::arithmetic_side_effects)]
//! Brim Eval - tree-walking evaluator.
//!
//! Walks an owned [`Expr`](brim_ir::Expr) tree and produces an `i64`,
//! reading and writing variables in a caller-owned [`Environment`].
//!
//! # Architecture
//!
//! - `Environment`: flat name → value map; unset names read as 0
//! - `Evaluator`: per-node dispatch over the closed `ExprKind` enum
//! - `evaluate_binary`: checked integer arithmetic for each `BinaryOp`
//!
//! Every value is an `i64`. Arithmetic never wraps: overflow and division by
//! zero are reported as [`EvalError`] and abort the run.

mod environment;
mod errors;
mod interpreter;
mod operators;

pub use environment::Environment;
pub use errors::EvalError;
pub use interpreter::{evaluate, Evaluator};
pub use operators::evaluate_binary;

/// Result of evaluating a node.
pub type EvalResult = Result<i64, EvalError>;

//! Brim IR - shared data types for the Brim interpreter.
//!
//! This crate contains the data structures every pipeline stage agrees on:
//! - Spans for source locations
//! - Tokens produced by the scanner
//! - AST nodes (`Expr`, `ExprKind`) and binary operators
//!
//! The AST is an owned tree: each node exclusively owns its children through
//! `Box`/`Vec`, so there are no shared subtrees and no cycles.

pub mod ast;
mod span;
mod token;

pub use ast::{BinaryOp, Expr, ExprKind};
pub use span::Span;
pub use token::{Token, TokenKind};

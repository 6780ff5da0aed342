//! Parser tests.
//!
//! Trees are compared through their fully parenthesized `Display` form,
//! which ignores spans.


use crate::{parse_source, ParseError, SyntaxError};
use brim_ir::Expr;
use brim_lexer::Dialect;

/// Parse an arithmetic-dialect source and render the tree.
fn expr(source: &str) -> String {
    parse_source(source, Dialect::Arithmetic)
        .unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"))
        .to_string()
}

/// Parse a block-dialect program.
fn program(source: &str) -> Expr {
    parse_source(source, Dialect::Block)
        .unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"))
}

/// Parse, expecting a syntax error.
fn syntax_error(source: &str, dialect: Dialect) -> SyntaxError {
    match parse_source(source, dialect) {
        Err(ParseError::Syntax(err)) => err,
        Err(other) => panic!("expected syntax error for {source:?}, got {other}"),
        Ok(tree) => panic!("expected syntax error for {source:?}, parsed {tree}"),
    }
}

//! Recursive descent parser for Brim.
//!
//! Pulls tokens from a [`Scanner`] one at a time (single lookahead) and
//! builds an owned [`Expr`] tree. There is no error recovery: the first
//! syntax error aborts the parse and no partial tree is returned.
//!
//! # Grammar
//!
//! ```text
//! program    := statement* EOF
//! statement  := ifstmt | assignment
//! ifstmt     := "if" "(" comparison ")" "{" statement* "}"
//! assignment := IDENT "=" comparison ";"
//! comparison := expr (">" expr)*
//! expr       := term (("+" | "-" | "&") term)*
//! term       := factor (("*" | "/" | "|") factor)*
//! factor     := INT | IDENT | "(" comparison ")"
//! ```
//!
//! The arithmetic dialect parses a single `comparison` followed by EOF.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, SyntaxError};

use brim_ir::Expr;
use brim_lexer::{Dialect, LineSource, Scanner};
use tracing::debug;

/// Parser state.
pub struct Parser<L> {
    cursor: Cursor<L>,
    dialect: Dialect,
}

impl<L: LineSource> Parser<L> {
    /// Create a parser and fetch the first token.
    ///
    /// `scanner` should have been built with `dialect.keywords()`.
    pub fn new(scanner: Scanner<L>, dialect: Dialect) -> Result<Self, ParseError> {
        Ok(Parser {
            cursor: Cursor::new(scanner)?,
            dialect,
        })
    }

    /// Parse the whole input into one root node.
    ///
    /// Block dialect: an `ExprKind::Block` holding every statement.
    /// Arithmetic dialect: the expression tree itself.
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let root = match self.dialect {
            Dialect::Block => self.parse_program()?,
            Dialect::Arithmetic => self.parse_expression_source()?,
        };
        debug!(dialect = ?self.dialect, nodes = root.node_count(), "parsed");
        Ok(root)
    }
}

/// Parse everything `scanner` yields.
pub fn parse<L: LineSource>(scanner: Scanner<L>, dialect: Dialect) -> Result<Expr, ParseError> {
    Parser::new(scanner, dialect)?.parse()
}

/// Parse an in-memory source.
pub fn parse_source(source: &str, dialect: Dialect) -> Result<Expr, ParseError> {
    parse(Scanner::from_source(source, dialect.keywords()), dialect)
}

#[cfg(test)]
mod tests;

//! Scanner for Brim.
//!
//! The scanner pulls source lines from an external collaborator one at a
//! time and produces tokens on demand; nothing is tokenized ahead of the
//! parser. Keyword recognition is driven by a [`Keywords`] table chosen at
//! construction, so one scanner serves every [`Dialect`].
//!
//! # Module Structure
//!
//! - `scanner/`: [`Scanner`] and line loading
//! - `keywords.rs`: [`Keywords`] tables and [`Dialect`]
//! - `error.rs`: [`ScanError`]

mod error;
mod keywords;
mod scanner;

pub use error::ScanError;
pub use keywords::{Dialect, Keywords, IF, VAR};
pub use scanner::{LineSource, Scanner, SourceLines};

use brim_ir::{Token, TokenKind};

/// Scan an in-memory source to completion.
///
/// The returned list always ends with exactly one `EndOfInput` token.
/// Intended for tests and tooling; the parser pulls from a [`Scanner`]
/// directly.
pub fn tokenize(source: &str, keywords: Keywords) -> Result<Vec<Token>, ScanError> {
    let mut scanner = Scanner::from_source(source, keywords);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

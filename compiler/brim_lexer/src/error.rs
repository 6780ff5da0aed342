//! Scanner errors.

use std::io;

/// The input source failed while the scanner was loading a line.
///
/// Clean end of input is never an error; it produces `EndOfInput` tokens.
#[derive(Debug, thiserror::Error)]
#[error("failed to read source line {line}: {source}")]
pub struct ScanError {
    /// 1-based number of the line that could not be read.
    pub line: u32,
    #[source]
    pub source: io::Error,
}

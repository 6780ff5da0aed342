//! Driver-level error type.

use std::fmt;

use brim_eval::EvalError;
use brim_lexer::ScanError;
use brim_parse::{ParseError, SyntaxError};

/// Pipeline stage that produced an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Scan,
    Parse,
    Eval,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Scan => "scan",
            Stage::Parse => "parse",
            Stage::Eval => "eval",
        })
    }
}

/// Any failure of a run. The first error aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The line source failed.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// The input does not match the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// Division by zero or integer overflow.
    #[error(transparent)]
    Arithmetic(#[from] EvalError),
}

impl Error {
    pub fn stage(&self) -> Stage {
        match self {
            Error::Scan(_) => Stage::Scan,
            Error::Syntax(_) => Stage::Parse,
            Error::Arithmetic(_) => Stage::Eval,
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Syntax(err) => Error::Syntax(err),
            ParseError::Scan(err) => Error::Scan(err),
        }
    }
}

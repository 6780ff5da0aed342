//! Parse error types.
//!
//! Syntax errors carry WHERE (`span`), WHAT (`expected`/`found`) and the
//! construct being parsed at the time (`context`), so a caller can render
//! "expected `;`, found `}` while parsing an assignment".

use brim_ir::{Span, Token};
use brim_lexer::ScanError;
use std::fmt;

/// Construct being parsed when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Program,
    Statement,
    IfStatement,
    Assignment,
    Expression,
    ParenExpression,
}

impl ErrorContext {
    pub const fn description(self) -> &'static str {
        match self {
            ErrorContext::Program => "a program",
            ErrorContext::Statement => "a statement",
            ErrorContext::IfStatement => "an if statement",
            ErrorContext::Assignment => "an assignment",
            ErrorContext::Expression => "an expression",
            ErrorContext::ParenExpression => "a parenthesized expression",
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// The token stream does not match the grammar.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("{span}: expected {expected}, found {found}{}", in_context(.context))]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
        context: Option<ErrorContext>,
    },
    #[error("{span}: integer literal `{text}` does not fit in 64 bits")]
    IntegerOutOfRange { text: String, span: Span },
}

fn in_context(context: &Option<ErrorContext>) -> String {
    context.map_or_else(String::new, |c| format!(" while parsing {c}"))
}

impl SyntaxError {
    /// `expected` was required but `found` is the current token.
    pub fn unexpected(expected: impl Into<String>, found: &Token) -> Self {
        SyntaxError::UnexpectedToken {
            expected: expected.into(),
            found: found.describe(),
            span: found.span,
            context: None,
        }
    }

    /// Location of the offending token.
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::UnexpectedToken { span, .. } | SyntaxError::IntegerOutOfRange { span, .. } => {
                *span
            }
        }
    }

    /// Attach `context` unless an inner construct already did.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        if let SyntaxError::UnexpectedToken { context: slot @ None, .. } = &mut self {
            *slot = Some(context);
        }
        self
    }
}

/// Any failure while parsing.
///
/// The parser pulls tokens lazily, so a read failure in the scanner can
/// surface in the middle of a parse.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl ParseError {
    /// The syntax error, if this is one.
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            ParseError::Syntax(err) => Some(err),
            ParseError::Scan(_) => None,
        }
    }

    #[must_use]
    pub fn with_context(self, context: ErrorContext) -> Self {
        match self {
            ParseError::Syntax(err) => ParseError::Syntax(err.with_context(context)),
            scan @ ParseError::Scan(_) => scan,
        }
    }
}

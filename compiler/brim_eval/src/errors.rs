//! Runtime errors.

use brim_ir::{BinaryOp, Span};

/// Arithmetic failure during evaluation.
///
/// Both variants carry the span of the offending `Binary` node.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("{span}: division by zero")]
    DivisionByZero { span: Span },
    #[error("{span}: integer overflow in {}", .op.operation_name())]
    IntegerOverflow { op: BinaryOp, span: Span },
}

impl EvalError {
    pub fn span(&self) -> Span {
        match self {
            EvalError::DivisionByZero { span } | EvalError::IntegerOverflow { span, .. } => *span,
        }
    }
}

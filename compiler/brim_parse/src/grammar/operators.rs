//! Operator matching helpers.
//!
//! Every operator arrives as a single-character `Operator` token; the tier
//! a rule accepts is decided here by symbol.

use brim_ir::{BinaryOp, TokenKind};
use brim_lexer::LineSource;

use crate::Parser;

impl<L: LineSource> Parser<L> {
    fn match_binary_op(&self, accepts: impl Fn(BinaryOp) -> bool) -> Option<BinaryOp> {
        let token = self.cursor.current();
        if token.kind != TokenKind::Operator {
            return None;
        }
        BinaryOp::from_symbol(&token.text).filter(|&op| accepts(op))
    }

    pub(crate) fn match_comparison_op(&self) -> Option<BinaryOp> {
        self.match_binary_op(|op| op == BinaryOp::Gt)
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        self.match_binary_op(BinaryOp::is_additive)
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        self.match_binary_op(BinaryOp::is_multiplicative)
    }
}

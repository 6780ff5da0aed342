//! Expression parsing.
//!
//! Three left-associative tiers, loosest first: comparison (`>`),
//! additive (`+ - &`), multiplicative (`* / |`). Each tier folds its
//! operands into a left-leaning chain of `Binary` nodes; a node is only
//! built once both operands are complete.

use brim_ir::{BinaryOp, Expr, ExprKind, TokenKind};
use brim_lexer::LineSource;
use brim_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser, SyntaxError};

impl<L: LineSource> Parser<L> {
    /// `comparison := expr (">" expr)*`
    ///
    /// Entry point for every expression position. Parenthesized
    /// expressions recurse back here, hence the stack guard.
    pub(crate) fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            self.parse_binary_tier(Self::match_comparison_op, Self::parse_expr)
        })
    }

    /// `expr := term (("+" | "-" | "&") term)*`
    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_tier(Self::match_additive_op, Self::parse_term)
    }

    /// `term := factor (("*" | "/" | "|") factor)*`
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_tier(Self::match_multiplicative_op, Self::parse_factor)
    }

    fn parse_binary_tier(
        &mut self,
        match_op: fn(&Self) -> Option<BinaryOp>,
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut left = operand(self)?;
        while let Some(op) = match_op(self) {
            self.cursor.advance()?;
            let right = operand(self)?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    /// `factor := INT | IDENT | "(" comparison ")"`
    ///
    /// An identifier here is always a read; assignment only exists at
    /// statement level.
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Integer => {
                let token = self.cursor.advance()?;
                let value = token
                    .text
                    .parse::<i64>()
                    .map_err(|_| SyntaxError::IntegerOutOfRange {
                        text: token.text.clone(),
                        span: token.span,
                    })?;
                Ok(Expr::literal(value, token.span))
            }
            TokenKind::Identifier => {
                let token = self.cursor.advance()?;
                Ok(Expr::new(ExprKind::VarRef { name: token.text }, token.span))
            }
            TokenKind::LeftParen => self.in_error_context(ErrorContext::ParenExpression, |p| {
                p.cursor.advance()?;
                let inner = p.parse_comparison()?;
                p.cursor.eat(TokenKind::RightParen)?;
                Ok(inner)
            }),
            _ => Err(SyntaxError::unexpected("expression", self.cursor.current())
                .with_context(ErrorContext::Expression)
                .into()),
        }
    }
}

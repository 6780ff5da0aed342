//! Grammar rules.
//!
//! - `mod.rs`: program, statements, `if`, assignment
//! - `expr.rs`: comparison, expr, term, factor
//! - `operators.rs`: operator matching helpers

mod expr;
mod operators;

use brim_ir::{Expr, ExprKind, TokenKind};
use brim_lexer::{LineSource, IF};
use brim_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser, SyntaxError};

impl<L: LineSource> Parser<L> {
    /// Run `f`, tagging any syntax error it returns with `context`.
    ///
    /// The innermost context wins: an error already tagged by a nested
    /// construct keeps its tag.
    pub(crate) fn in_error_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        f(self).map_err(|err| err.with_context(context))
    }

    /// `program := statement* EOF`
    pub(crate) fn parse_program(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.current().span;
        let statements = self.parse_statements(TokenKind::EndOfInput)?;
        let end = self
            .in_error_context(ErrorContext::Program, |p| p.cursor.eat(TokenKind::EndOfInput))?
            .span;
        Ok(Expr::new(ExprKind::Block(statements), start.merge(end)))
    }

    /// Arithmetic dialect: `comparison EOF`.
    pub(crate) fn parse_expression_source(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_comparison()?;
        self.in_error_context(ErrorContext::Expression, |p| p.cursor.eat(TokenKind::EndOfInput))?;
        Ok(expr)
    }

    /// `statement*`, stopping before `terminator`.
    ///
    /// Reaching end of input before `terminator` is left to
    /// `parse_statement`, which rejects it.
    fn parse_statements(&mut self, terminator: TokenKind) -> Result<Vec<Expr>, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.check(terminator) {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    /// `statement := ifstmt | assignment`
    fn parse_statement(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        if token.is_keyword(IF) {
            self.parse_if()
        } else if token.kind == TokenKind::Identifier {
            self.parse_assignment()
        } else {
            Err(SyntaxError::unexpected("statement", token)
                .with_context(ErrorContext::Statement)
                .into())
        }
    }

    /// `ifstmt := "if" "(" comparison ")" "{" statement* "}"`
    ///
    /// Nested `if` blocks recurse through here, hence the stack guard.
    fn parse_if(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            self.in_error_context(ErrorContext::IfStatement, |p| {
                let start = p.cursor.eat_keyword(IF)?.span;
                p.cursor.eat(TokenKind::LeftParen)?;
                let condition = p.parse_comparison()?;
                p.cursor.eat(TokenKind::RightParen)?;
                let open = p.cursor.eat(TokenKind::LeftBrace)?.span;
                let statements = p.parse_statements(TokenKind::RightBrace)?;
                let close = p.cursor.eat(TokenKind::RightBrace)?.span;

                let body = Expr::new(ExprKind::Block(statements), open.merge(close));
                Ok(Expr::new(
                    ExprKind::If {
                        condition: Box::new(condition),
                        body: Box::new(body),
                    },
                    start.merge(close),
                ))
            })
        })
    }

    /// `assignment := IDENT "=" comparison ";"`
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        self.in_error_context(ErrorContext::Assignment, |p| {
            let target = p.cursor.eat(TokenKind::Identifier)?;
            p.cursor.eat(TokenKind::Assign)?;
            let value = p.parse_comparison()?;
            let end = p.cursor.eat(TokenKind::Semicolon)?.span;
            Ok(Expr::new(
                ExprKind::VarAssign {
                    name: target.text,
                    value: Box::new(value),
                },
                target.span.merge(end),
            ))
        })
    }
}

//! Single-token lookahead over a scanner.
//!
//! The cursor owns the scanner and the current token. Consuming a token
//! pulls exactly one more from the scanner, so lexing stays interleaved
//! with parsing.

use brim_ir::{Token, TokenKind};
use brim_lexer::{LineSource, ScanError, Scanner};
use tracing::trace;

use crate::{ParseError, SyntaxError};

/// Token cursor for the parser.
pub struct Cursor<L> {
    scanner: Scanner<L>,
    current: Token,
}

impl<L: LineSource> Cursor<L> {
    /// Wrap `scanner` and prime the lookahead with its first token.
    pub fn new(mut scanner: Scanner<L>) -> Result<Self, ScanError> {
        let current = scanner.next_token()?;
        Ok(Cursor { scanner, current })
    }

    /// The lookahead token.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub fn check_keyword(&self, keyword: &str) -> bool {
        self.current.is_keyword(keyword)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::EndOfInput)
    }

    /// Consume the current token unconditionally and return it.
    ///
    /// At end of input this returns another `EndOfInput`; the scanner
    /// repeats it indefinitely.
    pub fn advance(&mut self) -> Result<Token, ScanError> {
        let next = self.scanner.next_token()?;
        let token = std::mem::replace(&mut self.current, next);
        trace!(
            line = token.span.line,
            start = token.span.start,
            kind = ?token.kind,
            text = %token.text,
            "advance"
        );
        Ok(token)
    }

    /// Consume the current token if it has kind `kind`, else fail with a
    /// syntax error naming `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance()?)
        } else {
            Err(SyntaxError::unexpected(kind.display_name(), &self.current).into())
        }
    }

    /// Consume the current token if it is the keyword `keyword`.
    pub fn eat_keyword(&mut self, keyword: &str) -> Result<Token, ParseError> {
        if self.check_keyword(keyword) {
            Ok(self.advance()?)
        } else {
            Err(SyntaxError::unexpected(format!("keyword `{keyword}`"), &self.current).into())
        }
    }
}

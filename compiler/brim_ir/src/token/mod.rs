//! Token types for the Brim scanner.
//!
//! A token is an immutable `(kind, text)` pair plus the span it was scanned
//! from. Keywords share a single [`TokenKind::Keyword`] kind and are told
//! apart by their text, so the keyword set can vary per dialect without
//! touching this type.

use super::Span;
use std::fmt;

/// A scanned token.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Literal source text. Empty for [`TokenKind::EndOfInput`].
    pub text: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// End-of-input marker positioned at `span`.
    pub fn end_of_input(span: Span) -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            text: String::new(),
            span,
        }
    }

    /// Check for a specific keyword, e.g. `token.is_keyword("if")`.
    #[inline]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == keyword
    }

    /// Check for a specific operator symbol, e.g. `token.is_operator("+")`.
    #[inline]
    pub fn is_operator(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == symbol
    }

    /// Short human-readable description used in syntax errors.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Integer
            | TokenKind::Identifier
            | TokenKind::Keyword
            | TokenKind::Operator => format!("{} `{}`", self.kind.display_name(), self.text),
            _ => self.kind.display_name().to_string(),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {:?}", self.kind, self.text, self.span)
    }
}

/// Token kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    EndOfInput,
    Integer,
    Identifier,
    Keyword,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    /// Any other single character: `+ - * / & | >` and everything the
    /// grammar does not name.
    Operator,
    Assign,
    Semicolon,
}

impl TokenKind {
    /// Name used when reporting what the parser expected.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "end of input",
            TokenKind::Integer => "integer",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::LeftBrace => "`{`",
            TokenKind::RightBrace => "`}`",
            TokenKind::Operator => "operator",
            TokenKind::Assign => "`=`",
            TokenKind::Semicolon => "`;`",
        }
    }

    /// Kind of a single-character punctuation token, if `byte` is one.
    pub const fn punctuation(byte: u8) -> Option<TokenKind> {
        match byte {
            b'(' => Some(TokenKind::LeftParen),
            b')' => Some(TokenKind::RightParen),
            b'{' => Some(TokenKind::LeftBrace),
            b'}' => Some(TokenKind::RightBrace),
            b'=' => Some(TokenKind::Assign),
            b';' => Some(TokenKind::Semicolon),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

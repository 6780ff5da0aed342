//! Pull scanner over a line source.
//!
//! The scanner holds exactly one source line and a byte cursor into it.
//! When the cursor reaches the end of the line the next line is requested
//! from the source; tokens therefore never span a line break.
//!
//! # Classification
//!
//! At the cursor: whitespace is skipped; an ASCII digit starts an `Integer`
//! (maximal digit run); a letter starts a word (maximal letter/digit run)
//! that becomes `Keyword` or `Identifier` via the keyword table; `( ) { } = ;`
//! have their own kinds; any other single character is an `Operator`.
//!
//! # Comments
//!
//! A line whose very first byte is `#` is dropped whole when it is loaded.
//! A `#` anywhere else, including after leading whitespace, is an ordinary
//! `Operator` token.

use std::io;
use std::iter::Map;
use std::str::Lines;

use brim_ir::{Span, Token, TokenKind};
use tracing::{debug, trace};

use crate::{Keywords, ScanError};

/// Anything that yields source lines on demand.
///
/// Implemented for every iterator of `io::Result<String>`, which covers
/// `BufRead::lines()` and [`SourceLines`].
pub trait LineSource: Iterator<Item = io::Result<String>> {}

impl<T> LineSource for T where T: Iterator<Item = io::Result<String>> {}

/// Line source over an in-memory string, see [`Scanner::from_source`].
pub type SourceLines<'a> = Map<Lines<'a>, fn(&str) -> io::Result<String>>;

fn owned_line(line: &str) -> io::Result<String> {
    Ok(line.to_owned())
}

#[inline]
fn to_offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

/// Lazy token producer.
///
/// Generic over any [`LineSource`], so `BufRead::lines()` plugs in
/// directly. Line terminators are the source's
/// business; a `\n` that reaches the scanner is treated as whitespace.
pub struct Scanner<L> {
    lines: L,
    keywords: Keywords,
    /// Line currently being scanned.
    line: String,
    /// 1-based number of `line`; 0 before the first line is loaded.
    line_number: u32,
    /// Byte cursor into `line`, always on a char boundary.
    pos: usize,
    /// Set once the source is drained or has failed.
    exhausted: bool,
}

impl<'a> Scanner<SourceLines<'a>> {
    /// Scanner over an in-memory source, split with `str::lines`.
    pub fn from_source(source: &'a str, keywords: Keywords) -> Self {
        let to_owned: fn(&str) -> io::Result<String> = owned_line;
        Scanner::new(source.lines().map(to_owned), keywords)
    }
}

impl<L: LineSource> Scanner<L> {
    /// Create a scanner. No line is read until the first `next_token` call.
    pub fn new(lines: L, keywords: Keywords) -> Self {
        Scanner {
            lines,
            keywords,
            line: String::new(),
            line_number: 0,
            pos: 0,
            exhausted: false,
        }
    }

    /// Keyword table this scanner classifies words with.
    pub fn keywords(&self) -> Keywords {
        self.keywords
    }

    /// Number of the line most recently loaded (comment lines included).
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// Produce the next token.
    ///
    /// Returns `EndOfInput` once the source is exhausted, and keeps
    /// returning it on every later call. A read failure from the source is
    /// returned as [`ScanError`] and ends the stream.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        loop {
            let Some(c) = self.current_char() else {
                if self.load_line()? {
                    continue;
                }
                return Ok(Token::end_of_input(self.span_from(self.pos)));
            };

            if c.is_whitespace() {
                self.eat_while(char::is_whitespace);
                continue;
            }

            let token = self.classify(c);
            trace!(
                line = token.span.line,
                start = token.span.start,
                kind = ?token.kind,
                text = %token.text,
                "token"
            );
            return Ok(token);
        }
    }

    fn current_char(&self) -> Option<char> {
        self.line[self.pos..].chars().next()
    }

    /// Consume the token starting at the cursor. `c` is the char there and
    /// is not whitespace.
    fn classify(&mut self, c: char) -> Token {
        let start = self.pos;
        let kind = if c.is_ascii_digit() {
            self.eat_while(|c| c.is_ascii_digit());
            TokenKind::Integer
        } else if c.is_alphabetic() {
            self.eat_while(char::is_alphanumeric);
            if self.keywords.contains(&self.line[start..self.pos]) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            }
        } else {
            self.pos += c.len_utf8();
            u8::try_from(c)
                .ok()
                .and_then(TokenKind::punctuation)
                .unwrap_or(TokenKind::Operator)
        };
        Token::new(kind, &self.line[start..self.pos], self.span_from(start))
    }

    /// Advance the cursor past the longest prefix whose chars satisfy `pred`.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        let rest = &self.line[self.pos..];
        let len = rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(rest.len(), |(i, _)| i);
        self.pos += len;
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(self.line_number, to_offset(start), to_offset(self.pos))
    }

    /// Load the next non-comment line. Returns `false` when the source is
    /// exhausted.
    fn load_line(&mut self) -> Result<bool, ScanError> {
        while !self.exhausted {
            match self.lines.next() {
                None => self.exhausted = true,
                Some(Err(source)) => {
                    self.exhausted = true;
                    return Err(ScanError {
                        line: self.line_number.saturating_add(1),
                        source,
                    });
                }
                Some(Ok(text)) => {
                    self.line_number = self.line_number.saturating_add(1);
                    self.pos = 0;
                    if text.starts_with('#') {
                        debug!(line = self.line_number, "skipping comment line");
                        self.line.clear();
                        continue;
                    }
                    trace!(line = self.line_number, len = text.len(), "load line");
                    self.line = text;
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

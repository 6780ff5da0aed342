//! Source location spans.

use std::fmt;

/// Source location of a token or node.
///
/// Brim source is scanned line by line, so a span names the 1-based line
/// and the byte range `start..end` inside that line. Nodes that cover several
/// lines keep the span of the line they start on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub line: u32,
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Dummy span for synthesized nodes.
    pub const DUMMY: Span = Span {
        line: 0,
        start: 0,
        end: 0,
    };

    #[inline]
    pub const fn new(line: u32, start: u32, end: u32) -> Self {
        Span { line, start, end }
    }

    /// Zero-length span at `offset` on `line`.
    #[inline]
    pub const fn point(line: u32, offset: u32) -> Self {
        Span {
            line,
            start: offset,
            end: offset,
        }
    }

    /// Length of the span in bytes; 0 for a reversed span.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge two spans into one covering both.
    ///
    /// Spans on different lines cannot be represented as one range; the
    /// result keeps the earlier line and extends to the end of that line's
    /// portion.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => Span {
                line: self.line,
                start: self.start.min(other.start),
                end: self.end.max(other.end),
            },
            std::cmp::Ordering::Less => self,
            std::cmp::Ordering::Greater => other,
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.line, self.start, self.end)
    }
}

/// Renders as `line:column` with a 1-based column.
impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.start.saturating_add(1))
    }
}

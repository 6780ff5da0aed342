//! Keyword tables.
//!
//! A word is scanned as `Keyword` only if it appears in the table the
//! scanner was built with; otherwise it is an `Identifier`. Lookup is
//! case-sensitive.

/// Conditional statement keyword.
pub const IF: &str = "if";

/// Reserved declaration keyword. Scanned as a keyword but accepted by no
/// grammar rule.
pub const VAR: &str = "VAR";

/// A fixed set of reserved words.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Keywords {
    words: &'static [&'static str],
}

impl Keywords {
    /// No reserved words (arithmetic dialect).
    pub const NONE: Keywords = Keywords { words: &[] };

    /// `if` and `VAR` (block dialect).
    pub const BLOCK: Keywords = Keywords { words: &[IF, VAR] };

    /// Build a custom table.
    pub const fn new(words: &'static [&'static str]) -> Self {
        Keywords { words }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Keywords::BLOCK
    }
}

/// Language variant: which words are reserved and what a whole source
/// parses to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Dialect {
    /// A single arithmetic expression; no keywords.
    Arithmetic,
    /// A sequence of assignment and `if` statements.
    #[default]
    Block,
}

impl Dialect {
    pub const fn keywords(self) -> Keywords {
        match self {
            Dialect::Arithmetic => Keywords::NONE,
            Dialect::Block => Keywords::BLOCK,
        }
    }
}

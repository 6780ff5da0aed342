//! One-shot pipeline runs.

use brim_eval::{Environment, Evaluator};
use brim_lexer::{Dialect, LineSource, Scanner};
use brim_parse::Parser;
use tracing::debug;

use crate::Error;

/// Result of a successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Value of the root node. For a block program this is always 0.
    pub value: i64,
    /// Variables as left by the run.
    pub environment: Environment,
}

/// Pipeline configuration.
///
/// A session only fixes the dialect; every run starts from a fresh
/// environment, so one session can be reused for unrelated inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    dialect: Dialect,
}

impl Session {
    pub fn new(dialect: Dialect) -> Self {
        Session { dialect }
    }

    /// Run an in-memory source.
    pub fn run_source(&self, source: &str) -> Result<Outcome, Error> {
        self.run(Scanner::from_source(source, self.dialect.keywords()))
    }

    /// Run a line source, e.g. `BufRead::lines()`.
    ///
    /// Lines are pulled only as the parser needs them.
    pub fn run_lines<L: LineSource>(&self, lines: L) -> Result<Outcome, Error> {
        self.run(Scanner::new(lines, self.dialect.keywords()))
    }

    fn run<L: LineSource>(&self, scanner: Scanner<L>) -> Result<Outcome, Error> {
        let root = Parser::new(scanner, self.dialect)?.parse()?;
        debug!(dialect = ?self.dialect, nodes = root.node_count(), "parse complete");

        let mut environment = Environment::new();
        let value = Evaluator::new(&mut environment).eval(&root)?;
        debug!(value, bindings = environment.len(), "eval complete");

        Ok(Outcome { value, environment })
    }
}

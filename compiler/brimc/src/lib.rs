//! Brim driver.
//!
//! Wires the stages together: a [`Scanner`](brim_lexer::Scanner) feeds the
//! [`Parser`](brim_parse::Parser), whose single root node is handed to the
//! [`Evaluator`](brim_eval::Evaluator) together with a fresh
//! [`Environment`]. Scanning is interleaved with parsing; evaluation starts
//! only after the whole input has parsed.
//!
//! ```
//! let env = brimc::execute("x = 2 ; y = x * 3 ;").unwrap();
//! assert_eq!(env.sorted_bindings(), vec![("x", 2), ("y", 6)]);
//!
//! assert_eq!(brimc::evaluate("(2+3)*4").unwrap(), 20);
//! ```
//!
//! # Logging
//!
//! Every stage logs through `tracing`. Call [`init_tracing`] and set
//! `RUST_LOG` (e.g. `RUST_LOG=brim_parse=trace`) to see it.

mod error;
mod session;

pub use error::{Error, Stage};
pub use session::{Outcome, Session};

pub use brim_eval::Environment;
pub use brim_ir::Expr;
pub use brim_lexer::Dialect;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a global tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once; only
/// the first call has any effect. If the host application already installed
/// a global subscriber, that one is left in place and this call is a no-op.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true);
            let _ = tracing_subscriber::registry().with(tree).with(filter).try_init();
        }
    });
}

/// Parse `source` without evaluating it.
pub fn parse_source(source: &str, dialect: Dialect) -> Result<Expr, Error> {
    Ok(brim_parse::parse_source(source, dialect)?)
}

/// Evaluate a single arithmetic expression.
pub fn evaluate(source: &str) -> Result<i64, Error> {
    Ok(Session::new(Dialect::Arithmetic).run_source(source)?.value)
}

/// Run a block program and return the variables it leaves behind.
pub fn execute(source: &str) -> Result<Environment, Error> {
    Ok(Session::new(Dialect::Block).run_source(source)?.environment)
}

//! Shared test utilities for phase tests.

use brimc::{Dialect, Error, Session, Stage};
use std::io;

/// Run a block program and return its sorted bindings.
///
/// Panics if the run fails, printing the error.
pub fn bindings(source: &str) -> Vec<(String, i64)> {
    let env = brimc::execute(source)
        .unwrap_or_else(|e| panic!("program {source:?} failed at {} stage: {e}", e.stage()));
    env.sorted_bindings()
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value))
        .collect()
}

/// Owned `(name, value)` pairs for comparison with [`bindings`].
pub fn pairs(items: &[(&str, i64)]) -> Vec<(String, i64)> {
    items
        .iter()
        .map(|&(name, value)| (name.to_owned(), value))
        .collect()
}

/// Run `source` in `dialect`, expecting failure at `stage`.
pub fn fails_at(source: &str, dialect: Dialect, stage: Stage) -> Error {
    let err = Session::new(dialect)
        .run_source(source)
        .expect_err("run should have failed");
    assert_eq!(err.stage(), stage, "unexpected stage for {source:?}: {err}");
    err
}

/// Line source that yields `good` lines and then fails.
pub fn failing_lines(good: &[&str]) -> impl Iterator<Item = io::Result<String>> {
    good.iter()
        .map(|line| Ok((*line).to_owned()))
        .collect::<Vec<_>>()
        .into_iter()
        .chain(std::iter::once(Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stream closed",
        ))))
}

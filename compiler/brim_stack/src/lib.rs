//! Stack growth for deeply nested Brim programs.
//!
//! Both the parser and the evaluator recurse once per nesting level, so a
//! source like `((((...))))` or a tower of nested `if` blocks maps directly
//! onto call-stack depth. Every recursive entry point wraps its body in
//! [`ensure_sufficient_stack`], which grows the stack on native targets
//! instead of overflowing.
//!
//! On `wasm32` the closure is called directly.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const GROWTH: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn parse_factor(&mut self) -> Result<Expr, ParseError> {
///     ensure_sufficient_stack(|| self.parse_factor_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

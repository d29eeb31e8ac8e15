//! Stack growth for deeply nested Blue programs.
//!
//! The parser descends once per nested expression and the evaluator once per
//! nested node or function call. Source such as `- - - - ... 1` or a long
//! chain of recursive calls would otherwise exhaust the native stack long
//! before the interpreter's own call-depth limit kicks in.
//!
//! Every recursive entry point in `blue_parse` and `blue_eval` goes through
//! [`ensure_sufficient_stack`].

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;

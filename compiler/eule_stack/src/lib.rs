//! Stack growth for deep recursion.
//!
//! The parser recurses once per nested expression and the evaluator once per
//! nested node and script-level call, so a deeply nested script can exhaust
//! the native stack long before any interpreter limit trips. Both wrap their
//! recursive entry points in [`ensure_sufficient_stack`].
//!
//! On native targets `stacker` allocates a fresh segment when less than
//! [`RED_ZONE`] bytes remain. On WASM the closure is called directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if the remaining space is low.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;

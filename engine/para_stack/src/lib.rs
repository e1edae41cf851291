//! Stack growth for deeply nested expression and instruction trees.
//!
//! Expression evaluation and the instruction-tree traversals recurse once per
//! nesting level. Trees are always finite, but a generated formula or an
//! imported construction history can nest far deeper than the default thread
//! stack allows. Wrapping each recursive step in [`ensure_sufficient_stack`]
//! grows the stack on demand instead of overflowing.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` allocates a new stack segment when needed.
//! - **WASM targets**: passthrough (the host manages the stack).

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn depth(expr: &Expression) -> usize {
///     ensure_sufficient_stack(|| match expr {
///         Expression::Unary { operand, .. } => depth(operand) + 1,
///         _ => 1,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

//! Stack growth guard for recursive descent.
//!
//! The interpreter and AST teardown never recurse, but the parser does: each
//! nested block, parenthesised expression or prefix operator adds native
//! frames. Productions that can nest wrap their body in
//! [`ensure_sufficient_stack`] so adversarial inputs grow the stack instead
//! of overflowing it.
//!
//! - **Red zone**: 128 KiB. Below this much remaining stack, grow.
//! - **Segment size**: 1 MiB per growth.
//!
//! On wasm32 the guard is a passthrough.

const RED_ZONE: usize = 128 * 1024;

const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the native stack if less than the red zone is left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

//! Stack growth for deeply recursive parsing and evaluation.
//!
//! Nested parentheses in the parser and recursive C functions in the
//! evaluator both recurse on the native stack. Every such entry point wraps
//! its body in [`ensure_sufficient_stack`], which grows the stack on demand
//! instead of overflowing.
//!
//! On `wasm32` the guard is a plain call.

/// Grow when less than this much stack remains (100 KiB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1 MiB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_closure_result() {
        assert_eq!(ensure_sufficient_stack(|| 7 * 6), 42);
        let result: Result<i32, String> = ensure_sufficient_stack(|| Ok(5));
        assert_eq!(result, Ok(5));
    }

    #[test]
    fn survives_deep_recursion() {
        fn depth(n: u32) -> u32 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
        }
        assert_eq!(depth(200_000), 200_000);
    }
}

//! Sentinel-based numeric guard.
//!
//! Rust has no arithmetic exceptions to catch, so the primary/fallback-closure
//! contract from the original Cosmos SDK module (`sdkerrors`-wrapped panics
//! recovered at the message handler) is reimplemented as a plain function
//! taking a fallible primary closure and an infallible fallback closure. The
//! only observable behavior is the substituted value — callers never see the
//! underlying arithmetic failure.

use tracing::warn;

/// Runs `primary`; if it returns `None` (overflow, division by zero, square
/// root of a negative number, ...), logs at `warn` and returns `fallback()`
/// instead. Never panics, never returns an `Err` to the caller.
pub fn safe_math<T>(label: &str, primary: impl FnOnce() -> Option<T>, fallback: impl FnOnce() -> T) -> T {
    match primary() {
        Some(value) => value,
        None => {
            warn!(operation = label, "SafeMath fallback triggered");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_success_is_returned() {
        let r = safe_math("add", || Some(5), || 0);
        assert_eq!(r, 5);
    }

    #[test]
    fn fallback_used_on_none() {
        let r: i32 = safe_math("div", || None, || -1);
        assert_eq!(r, -1);
    }
}

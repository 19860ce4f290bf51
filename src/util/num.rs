/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `u64` to `f64` if and only if it is exactly representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use graphfx::util::num::{MAX_SAFE_U64_INT, u64_to_f64_checked};
///
/// assert_eq!(u64_to_f64_checked(1234, "too big"), Ok(1234.0));
/// assert!(u64_to_f64_checked(MAX_SAFE_U64_INT + 1, "too big").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn u64_to_f64_checked<E>(value: u64, error: E) -> Result<f64, E> {
    if value > MAX_SAFE_U64_INT {
        return Err(error);
    }

    Ok(value as f64)
}

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use graphfx::util::num::usize_to_f64_checked;
///
/// assert_eq!(usize_to_f64_checked(100, ()), Ok(100.0));
/// ```
pub fn usize_to_f64_checked<E>(value: usize, error: E) -> Result<f64, E> {
    let Ok(value) = u64::try_from(value) else {
        return Err(error);
    };
    u64_to_f64_checked(value, error)
}

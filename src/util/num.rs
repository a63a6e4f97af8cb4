/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Largest `n` whose factorial is finite as an `f64`.
pub const MAX_FINITE_FACTORIAL: u64 = 170;

/// Lower bound of the `i64` range as an exact `f64` (`-2^63`).
const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;

/// Upper bound (exclusive) of the `i64` range as an exact `f64` (`2^63`).
const I64_END_F64: f64 = 9_223_372_036_854_775_808.0;

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// ## Returns
/// - `Some(i64)`: The truncated value.
/// - `None`: If the value is NaN, infinite or outside the `i64` range.
///
/// ## Example
/// ```
/// use infixa::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(7.9), Some(7));
/// assert_eq!(f64_to_i64_truncated(-7.9), Some(-7));
/// assert_eq!(f64_to_i64_truncated(f64::NAN), None);
/// assert_eq!(f64_to_i64_truncated(1e19), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i64_truncated(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    if !truncated.is_finite() || !(I64_MIN_F64..I64_END_F64).contains(&truncated) {
        return None;
    }
    Some(truncated as i64)
}

/// Converts an `f64` to `u64` if it is a non-negative integer that `f64`
/// represents exactly.
///
/// ## Returns
/// - `Some(u64)`: The integer value.
/// - `None`: If the value is negative, fractional, non-finite or above
///   `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use infixa::util::num::f64_to_u64_exact;
///
/// assert_eq!(f64_to_u64_exact(5.0), Some(5));
/// assert_eq!(f64_to_u64_exact(5.5), None);
/// assert_eq!(f64_to_u64_exact(-1.0), None);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_u64_exact(value: f64) -> Option<u64> {
    if !value.is_finite() || value < 0.0 || value != value.floor() {
        return None;
    }
    if value > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    Some(value as u64)
}

/// Converts an `i64` produced by an integer operation back to `f64`.
///
/// Values beyond `2^53` round to the nearest representable `f64`, which is
/// how the result of integer division is carried on the evaluation stack.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a `u64` to `f64`, rounding values above `MAX_SAFE_U64_INT`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn u64_to_f64(value: u64) -> f64 {
    value as f64
}

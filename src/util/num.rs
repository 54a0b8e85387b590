use crate::{error::EvalError, interpreter::{evaluator::core::EvalResult, lexer::Position}};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use darja::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// // Works for safe values
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// // Fails for values outside safe range
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts an `f64` to `i64` by truncating toward zero.
///
/// This backs the `int()` builtin, so unlike a plain `as` cast it refuses
/// values that do not fit instead of saturating.
///
/// ## Errors
/// - `InvalidArgument` for NaN and infinities.
/// - `Overflow` for values outside the `i64` range.
///
/// ## Example
/// ```
/// use darja::{error::EvalError, interpreter::lexer::Position, util::num::f64_to_i64_truncated};
///
/// let at = Position::new(1, 1);
/// assert_eq!(f64_to_i64_truncated(-2.75, at).unwrap(), -2);
///
/// let err = f64_to_i64_truncated(1e20, at).unwrap_err();
/// assert!(matches!(err, EvalError::Overflow { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64, position: Position) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(EvalError::InvalidArgument { details: format!("cannot convert {value} to an integer"),
                                                position });
    }
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(EvalError::Overflow { position });
    }
    Ok(truncated as i64)
}

/// Converts a `usize` (a length or a count) to an `i64` value.
///
/// ## Errors
/// Returns `Overflow` if the count does not fit in an `i64`.
pub fn usize_to_i64_checked(value: usize, position: Position) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| EvalError::Overflow { position })
}

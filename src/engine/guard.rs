//! Poka-Yoke precondition checks for caller-supplied parameters.
//!
//! The engine's typed API (`usize` batch sizes, [`Axis`](super::point::Axis))
//! rules out most bad input at compile time. These checks cover what the
//! types cannot: signed sizes arriving from drivers and non-finite floats.

use crate::error::{SimError, SimResult};

/// Convert a signed batch size into a `usize`, rejecting negatives.
///
/// # Errors
///
/// Returns [`SimError::InvalidParameter`] if `k < 0` or does not fit in `usize`.
pub fn check_batch_size(k: i64) -> SimResult<usize> {
    if k < 0 {
        return Err(SimError::invalid_parameter(
            "k",
            format!("batch size must be non-negative, got {k}"),
        ));
    }
    usize::try_from(k).map_err(|_| {
        SimError::invalid_parameter("k", format!("batch size {k} exceeds platform limit"))
    })
}

/// Reject NaN and infinities.
///
/// # Errors
///
/// Returns [`SimError::InvalidParameter`] if `value` is not finite.
pub fn check_finite(name: &str, value: f64) -> SimResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::invalid_parameter(
            name,
            format!("must be finite, got {value}"),
        ))
    }
}

/// Reject non-finite and non-positive values.
///
/// # Errors
///
/// Returns [`SimError::InvalidParameter`] if `value` is not finite or `<= 0`.
pub fn check_positive(name: &str, value: f64) -> SimResult<f64> {
    let value = check_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::invalid_parameter(
            name,
            format!("must be positive, got {value}"),
        ))
    }
}

//! Integer conversions
//!
//! One implementation per source type instead of a single catch-all, so every
//! failure mode is visible in the signature.

use crate::errors::UtilError;

/// Lossy-but-checked conversion to a 64-bit integer
///
/// Floats are truncated toward zero. NaN, infinities and values outside the
/// `i64` range are errors, as is text that does not parse as a base-10
/// integer.
pub trait ToInt64 {
    fn to_i64(&self) -> Result<i64, UtilError>;

    /// Decimal rendering of [`ToInt64::to_i64`]
    fn to_int_string(&self) -> Result<String, UtilError> {
        self.to_i64().map(|value| value.to_string())
    }
}

impl ToInt64 for i32 {
    fn to_i64(&self) -> Result<i64, UtilError> {
        Ok(i64::from(*self))
    }
}

impl ToInt64 for i64 {
    fn to_i64(&self) -> Result<i64, UtilError> {
        Ok(*self)
    }
}

impl ToInt64 for f32 {
    fn to_i64(&self) -> Result<i64, UtilError> {
        float_to_i64(f64::from(*self))
    }
}

impl ToInt64 for f64 {
    fn to_i64(&self) -> Result<i64, UtilError> {
        float_to_i64(*self)
    }
}

impl ToInt64 for str {
    fn to_i64(&self) -> Result<i64, UtilError> {
        self.trim()
            .parse::<i64>()
            .map_err(|err| UtilError::Conversion {
                input: self.to_string(),
                reason: err.to_string(),
            })
    }
}

impl ToInt64 for String {
    fn to_i64(&self) -> Result<i64, UtilError> {
        self.as_str().to_i64()
    }
}

fn float_to_i64(value: f64) -> Result<i64, UtilError> {
    let conversion_error = |reason: &str| UtilError::Conversion {
        input: value.to_string(),
        reason: reason.to_string(),
    };

    if !value.is_finite() {
        return Err(conversion_error("not a finite number"));
    }

    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(conversion_error("out of range for i64"));
    }

    Ok(truncated as i64)
}

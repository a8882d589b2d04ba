//! Shared numeric helpers for the computation engine.
//!
//! All mark figures the engine returns (`total_internal`, `total`, SGPA)
//! are rounded to exactly two decimal places, and every computation entry
//! point coerces absent or non-finite inputs to zero through
//! [`number_or_zero`]. The coercion is explicit and uniform here rather
//! than implicit at each call site.

/// Round a value to two decimal places, half away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Coerce an optional mark to a number, treating missing and non-finite
/// values as zero.
///
/// This is the engine-wide policy for bad inputs: computation stays
/// permissive and always yields a number, while the validator is the sole
/// gate for data-quality concerns.
#[must_use]
pub fn number_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

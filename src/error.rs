//! Error types for the pricing core.

use thiserror::Error;

/// Every failure the core can report is an input-validation failure: a bad
/// side flag, a non-positive or non-finite market parameter, or a malformed
/// range. Errors are detected before any floating-point work starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

/// Reject anything that is not a finite, strictly positive number.
pub(crate) fn require_positive(name: &str, value: f64) -> PricingResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PricingError::invalid_parameter(format!(
            "{name} must be a finite positive number, got {value}"
        )));
    }
    Ok(())
}

pub(crate) fn require_finite(name: &str, value: f64) -> PricingResult<()> {
    if !value.is_finite() {
        return Err(PricingError::invalid_parameter(format!(
            "{name} must be finite, got {value}"
        )));
    }
    Ok(())
}

// src/error.rs

//! Error types for the GBSM pricing formulas.
//!
//! Every fallible operation returns `Result<T, PricingError>` rather than
//! panicking or letting a NaN escape. Invalid inputs are caller bugs, so they
//! are detected at the boundary of each formula call and surfaced immediately;
//! there are no retries and no partial results.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Errors raised by the pricing and greek formulas.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Input is outside the formula's domain (non-positive spot, strike or
    /// volatility, negative time to expiry, non-finite value).
    #[error("domain error: {0}")]
    Domain(String),

    /// Evaluation would divide by zero (volatility or time to expiry of
    /// exactly zero makes the d1 denominator vanish).
    #[error("numeric error: {0}")]
    Numeric(String),
}

impl PricingError {
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn numeric(msg: impl Into<String>) -> Self {
        Self::Numeric(msg.into())
    }
}

// src/types.rs

//! Input types shared by the pricing and greek formulas.
//!
//! The model is parameterized by the usual Black-Scholes quantities plus a
//! cost-of-carry rate `b`, which folds several classic model variants into a
//! single formula:
//!
//! - b = r        Black-Scholes 1973 stock option model
//! - b = r - q    Merton 1973 model with continuous dividend yield q
//! - b = 0        Black 1976 futures option model
//! - b = 0, r = 0 Asay 1982 margined futures option model
//! - b = r - r_f  Garman-Kohlhagen 1983 currency option model

use std::fmt;
use std::str::FromStr;

use crate::error::{PricingError, Result};

/// Call/put selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Intrinsic value of the payoff at the given spot and strike.
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Accepts the single-letter flags used by option chain feeds ("c"/"p")
    /// as well as the spelled-out names, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "c" | "call" => Ok(OptionType::Call),
            "p" | "put" => Ok(OptionType::Put),
            other => Err(PricingError::domain(format!(
                "invalid option type: {} (expected call/c or put/p)",
                other
            ))),
        }
    }
}

/// Parameters for a single GBSM formula evaluation.
///
/// Each evaluation is stateless and independent; the struct is a plain value
/// with no lifecycle across calls.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbsInputs {
    /// Underlying asset price (must be > 0)
    pub spot: f64,
    /// Strike price (must be > 0)
    pub strike: f64,
    /// Time to expiration in years (must be > 0)
    pub years_to_exp: f64,
    /// Annualized risk-free interest rate
    pub rate: f64,
    /// Cost-of-carry rate (see module docs for model variants)
    pub carry: f64,
    /// Annualized volatility (must be > 0)
    pub vol: f64,
}

/// Helper function to validate GBSM inputs before formula evaluation.
fn validate_gbs_inputs(inputs: &GbsInputs) -> Result<()> {
    let GbsInputs {
        spot,
        strike,
        years_to_exp,
        rate,
        carry,
        vol,
    } = *inputs;

    for (name, value) in [
        ("spot", spot),
        ("strike", strike),
        ("years_to_exp", years_to_exp),
        ("rate", rate),
        ("carry", carry),
        ("vol", vol),
    ] {
        if !value.is_finite() {
            return Err(PricingError::domain(format!(
                "GbsInputs validation: {} ({}) must be finite",
                name, value
            )));
        }
    }
    if spot <= 0.0 {
        return Err(PricingError::domain(format!(
            "GbsInputs validation: spot ({}) must be > 0",
            spot
        )));
    }
    if strike <= 0.0 {
        return Err(PricingError::domain(format!(
            "GbsInputs validation: strike ({}) must be > 0",
            strike
        )));
    }
    if years_to_exp < 0.0 {
        return Err(PricingError::domain(format!(
            "GbsInputs validation: years_to_exp ({}) must be >= 0",
            years_to_exp
        )));
    }
    if vol < 0.0 {
        return Err(PricingError::domain(format!(
            "GbsInputs validation: vol ({}) must be > 0",
            vol
        )));
    }
    // Zero vol or zero time makes the d1 denominator vanish. Classified as a
    // numeric failure rather than a domain one: the values are individually
    // meaningful (an expired or deterministic option) but the closed form
    // cannot evaluate them.
    if vol == 0.0 {
        return Err(PricingError::numeric(
            "GbsInputs validation: vol is zero, d1 denominator vanishes",
        ));
    }
    if years_to_exp == 0.0 {
        return Err(PricingError::numeric(
            "GbsInputs validation: years_to_exp is zero, d1 denominator vanishes",
        ));
    }

    Ok(())
}

impl GbsInputs {
    /// Creates a new parameter set with validation.
    pub fn new(
        spot: f64,
        strike: f64,
        years_to_exp: f64,
        rate: f64,
        carry: f64,
        vol: f64,
    ) -> Result<Self> {
        let inputs = Self {
            spot,
            strike,
            years_to_exp,
            rate,
            carry,
            vol,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Validates the current parameter set.
    pub fn validate(&self) -> Result<()> {
        validate_gbs_inputs(self)
    }

    /// Black-Scholes 1973 stock option parameterization (b = r).
    pub fn black_scholes_1973(
        spot: f64,
        strike: f64,
        years_to_exp: f64,
        rate: f64,
        vol: f64,
    ) -> Result<Self> {
        Self::new(spot, strike, years_to_exp, rate, rate, vol)
    }

    /// Merton 1973 parameterization with continuous dividend yield q
    /// (b = r - q).
    pub fn merton_1973(
        spot: f64,
        strike: f64,
        years_to_exp: f64,
        rate: f64,
        dividend_yield: f64,
        vol: f64,
    ) -> Result<Self> {
        Self::new(spot, strike, years_to_exp, rate, rate - dividend_yield, vol)
    }

    /// Black 1976 futures option parameterization (b = 0).
    pub fn black_1976(
        spot: f64,
        strike: f64,
        years_to_exp: f64,
        rate: f64,
        vol: f64,
    ) -> Result<Self> {
        Self::new(spot, strike, years_to_exp, rate, 0.0, vol)
    }

    /// Asay 1982 margined futures option parameterization (b = 0, r = 0).
    pub fn asay_1982(spot: f64, strike: f64, years_to_exp: f64, vol: f64) -> Result<Self> {
        Self::new(spot, strike, years_to_exp, 0.0, 0.0, vol)
    }

    /// Garman-Kohlhagen 1983 currency option parameterization
    /// (b = r - r_f, with r_f the foreign risk-free rate).
    pub fn garman_kohlhagen_1983(
        spot: f64,
        strike: f64,
        years_to_exp: f64,
        rate: f64,
        foreign_rate: f64,
        vol: f64,
    ) -> Result<Self> {
        Self::new(spot, strike, years_to_exp, rate, rate - foreign_rate, vol)
    }
}

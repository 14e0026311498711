// src/models/gbs/mod.rs

//! Generalized Black-Scholes-Merton (GBSM) closed-form pricing
//!
//! The GBSM model prices European options on a broad class of underlyings by
//! folding dividends, futures and FX variants into a single cost-of-carry
//! rate b (see [`crate::types::GbsInputs`] for the variants). With
//!
//! d1 = (ln(S/X) + (b + v²/2)·T) / (v·√T)
//! d2 = d1 − v·√T
//!
//! the price is
//!
//! call: S·e^((b−r)T)·Φ(d1) − X·e^(−rT)·Φ(d2)
//! put:  X·e^(−rT)·Φ(−d2) − S·e^((b−r)T)·Φ(−d1)
//!
//! and Delta, the hedge ratio ∂price/∂S, is
//!
//! call: e^((b−r)T)·Φ(d1)
//! put:  e^((b−r)T)·(Φ(d1) − 1)
//!
//! The log term is the natural logarithm. Every function here is a pure,
//! single-shot evaluation: no state, no iteration, bounded constant time.

use crate::error::Result;
use crate::models::math::norm_cdf;
use crate::types::{GbsInputs, OptionType};

/// The d1 intermediate term.
///
/// Assumes validated inputs; callers going through [`price`] or [`delta`] get
/// validation for free.
pub fn d1(inputs: &GbsInputs) -> f64 {
    let GbsInputs {
        spot,
        strike,
        years_to_exp: t,
        carry,
        vol,
        ..
    } = *inputs;
    ((spot / strike).ln() + (carry + 0.5 * vol * vol) * t) / (vol * t.sqrt())
}

/// The d2 intermediate term, d1 − v·√T.
pub fn d2(inputs: &GbsInputs) -> f64 {
    d1(inputs) - inputs.vol * inputs.years_to_exp.sqrt()
}

/// Theoretical present value of a European option under GBSM.
///
/// Validates the inputs and evaluates the closed form with the crate's
/// default normal CDF.
///
/// # Errors
///
/// * `PricingError::Domain` for non-positive spot/strike/vol, negative time,
///   or non-finite inputs
/// * `PricingError::Numeric` for zero vol or zero time (the d1 denominator
///   vanishes)
pub fn price(option_type: OptionType, inputs: &GbsInputs) -> Result<f64> {
    price_with_cdf(option_type, inputs, norm_cdf)
}

/// [`price`] with a caller-supplied standard normal CDF.
///
/// The CDF is a plain function parameter so alternative implementations
/// (higher-precision, table-driven, instrumented for tests) can be swapped in
/// without touching the formula.
pub fn price_with_cdf<F>(option_type: OptionType, inputs: &GbsInputs, cdf: F) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    inputs.validate()?;

    let GbsInputs {
        spot,
        strike,
        years_to_exp: t,
        rate,
        carry,
        ..
    } = *inputs;

    let d1 = d1(inputs);
    let d2 = d2(inputs);
    let carry_df = ((carry - rate) * t).exp();
    let df = (-rate * t).exp();

    let price = match option_type {
        OptionType::Call => spot * carry_df * cdf(d1) - strike * df * cdf(d2),
        OptionType::Put => strike * df * cdf(-d2) - spot * carry_df * cdf(-d1),
    };

    Ok(price)
}

/// Delta, the first derivative of the GBSM price with respect to spot.
///
/// Shares the domain constraints and error conditions of [`price`].
pub fn delta(option_type: OptionType, inputs: &GbsInputs) -> Result<f64> {
    delta_with_cdf(option_type, inputs, norm_cdf)
}

/// [`delta`] with a caller-supplied standard normal CDF.
pub fn delta_with_cdf<F>(option_type: OptionType, inputs: &GbsInputs, cdf: F) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    inputs.validate()?;

    let carry_df = ((inputs.carry - inputs.rate) * inputs.years_to_exp).exp();
    let nd1 = cdf(d1(inputs));

    let delta = match option_type {
        OptionType::Call => carry_df * nd1,
        OptionType::Put => carry_df * (nd1 - 1.0),
    };

    Ok(delta)
}

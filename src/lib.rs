//! # GBS-Lib: Generalized Black-Scholes-Merton Option Pricing
//!
//! `gbs-lib` provides closed-form European option pricing under the
//! Generalized Black-Scholes-Merton (GBSM) model, which unifies the classic
//! Black-Scholes 1973, Merton 1973, Black 1976, Asay 1982 and
//! Garman-Kohlhagen 1983 variants through a single cost-of-carry rate.
//!
//! ## Core Features
//!
//! - **GBSM Pricing**: Theoretical call and put present values with
//!   cost-of-carry
//! - **Delta Greek**: The hedge ratio ∂price/∂spot in the same
//!   parameterization
//! - **Validated Inputs**: Out-of-range parameters surface as typed errors,
//!   never as NaN
//! - **Injectable CDF**: The standard normal CDF is a swappable dependency of
//!   each formula
//!
//! ## Quick Start
//!
//! ```rust
//! use gbs_lib::{delta, price, GbsInputs, OptionType};
//!
//! // Put on a dividend-paying stock: S=75, X=70, T=0.5y, r=10%, b=5%, v=35%
//! let inputs = GbsInputs::new(75.0, 70.0, 0.5, 0.10, 0.05, 0.35)?;
//!
//! let put_price = price(OptionType::Put, &inputs)?;
//! let put_delta = delta(OptionType::Put, &inputs)?;
//!
//! assert!((put_price - 4.0870).abs() < 1e-3);
//! assert!(put_delta < 0.0);
//! # Ok::<(), gbs_lib::PricingError>(())
//! ```
//!
//! ## Model Support
//!
//! The cost-of-carry rate `b` selects the model variant; see the constructors
//! on [`GbsInputs`] for the standard parameterizations.
//!
//! Every formula is a pure, stateless, constant-time evaluation and is safe
//! to call concurrently without coordination.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod types;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Error taxonomy
pub use error::{PricingError, Result};

// Input types
pub use types::{GbsInputs, OptionType};

// Pricing and greek formulas
pub use models::gbs::{d1, d2, delta, delta_with_cdf, price, price_with_cdf};

// Default standard normal CDF used by the non-injected entry points
pub use models::math::norm_cdf;

pub mod gbs;

/// Shared math utilities for the pricing formulas
pub mod math {
    /// Standard normal cumulative distribution function.
    ///
    /// 0.5 * [1 + erf(x / sqrt(2))], evaluated in full double precision via
    /// `libm::erf`. Stateless and re-entrant, so safe to call from any thread.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
    }
}

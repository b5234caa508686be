//! Gaussian success model.
//!
//! A category "succeeds" when its latent draw lands below the global
//! threshold, so its success probability is the normal CDF at the
//! threshold: Φ((T − μ) / σ).

use std::f64::consts::SQRT_2;

use bdt_core::errors::{AgentError, AgentResult};
use bdt_core::types::Category;
use statrs::function::erf::erf;

/// Φ((t − mu) / sigma), computed through the error function.
///
/// Returns exactly 0.5 at `t == mu`, tends to 0 as `t → −∞` and to 1
/// as `t → +∞`. Fails with `InvalidParameter` unless `sigma > 0`.
pub fn gaussian_cdf(t: f64, mu: f64, sigma: f64) -> AgentResult<f64> {
    if sigma <= 0.0 || sigma.is_nan() {
        return Err(AgentError::invalid_parameter(
            "std_dev",
            format!("must be positive, got {sigma}"),
        ));
    }
    let z = (t - mu) / (sigma * SQRT_2);
    Ok(0.5 * (1.0 + erf(z)))
}

/// P[X < threshold] for X drawn from `category`.
pub fn success_probability(category: &Category, threshold: f64) -> AgentResult<f64> {
    gaussian_cdf(threshold, category.mean(), category.std_dev())
}

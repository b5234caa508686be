//! Expected utility of one category.

use bdt_core::errors::AgentResult;
use bdt_core::types::{Category, Reward};
use serde::Serialize;

use crate::gaussian;
use crate::tempering;

/// Scalar parameters the utility depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtilityParams {
    /// Global decision threshold `T`.
    pub threshold: f64,
    /// Perceptual inverse temperature.
    pub alpha: f64,
    /// Reward inverse temperature.
    pub beta: f64,
}

/// Every intermediate of the utility computation for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UtilityTerms {
    pub raw_success: f64,
    pub tempered_success: f64,
    pub reward: Reward,
    pub utility: f64,
}

/// `p · r_s^β + (1 − p) · r_f^β` for a tempered success probability `p`.
///
/// `β = 0` collapses both reward terms to 1, leaving `p + (1 − p)`.
/// A negative reward under non-integral `β` gives NaN.
pub fn reward_weighted(tempered_success: f64, reward: Reward, beta: f64) -> f64 {
    let p_fail = 1.0 - tempered_success;
    tempered_success * reward.success.powf(beta) + p_fail * reward.failure.powf(beta)
}

/// Success model, then tempering, then reward weighting.
pub fn evaluate(
    category: &Category,
    reward: Reward,
    params: &UtilityParams,
) -> AgentResult<UtilityTerms> {
    let raw_success = gaussian::success_probability(category, params.threshold)?;
    let tempered_success = tempering::temper(raw_success, params.alpha);
    let utility = reward_weighted(tempered_success, reward, params.beta);
    Ok(UtilityTerms {
        raw_success,
        tempered_success,
        reward,
        utility,
    })
}

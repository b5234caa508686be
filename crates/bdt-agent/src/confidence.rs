//! Confidence scoring.
//!
//! Three interchangeable metrics map a posterior to [0, 1]:
//! a delta posterior scores 1, a uniform one scores 0.
//!
//! - `entropy`: `1 + Σ p·ln p / ln N`. Smooth, information-theoretic.
//! - `map`: `(N·max p − 1) / (N − 1)`. Linear in the peak.
//! - `diff`: gap between the two largest values. Cheapest, and the only
//!   one that stays meaningful if more than two options are ever scored.

use std::fmt;
use std::str::FromStr;

use bdt_core::constants::CONFIDENCE_MODELS;
use bdt_core::errors::AgentError;
use serde::{Deserialize, Serialize};

use crate::posterior::Posterior;

/// Which confidence metric an agent reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceModel {
    Map,
    Diff,
    #[default]
    Entropy,
}

impl ConfidenceModel {
    pub const ALL: [ConfidenceModel; 3] = [Self::Map, Self::Diff, Self::Entropy];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Diff => "diff",
            Self::Entropy => "entropy",
        }
    }

    /// Score a posterior with this metric.
    pub fn score(&self, posterior: &Posterior) -> f64 {
        self.score_probabilities(&posterior.probabilities())
    }

    /// Score raw probabilities. Needs at least two values; `map` and
    /// `entropy` divide by zero on a single value.
    pub fn score_probabilities(&self, probs: &[f64]) -> f64 {
        match self {
            Self::Map => map_confidence(probs),
            Self::Diff => diff_confidence(probs),
            Self::Entropy => entropy_confidence(probs),
        }
    }
}

impl fmt::Display for ConfidenceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfidenceModel {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "map" => Ok(Self::Map),
            "diff" => Ok(Self::Diff),
            "entropy" => Ok(Self::Entropy),
            other => Err(AgentError::invalid_configuration(
                "confidence_model",
                format!("'{other}' is not one of {}", CONFIDENCE_MODELS.join(", ")),
            )),
        }
    }
}

/// `Σ p·ln p` over entries with `p > 0` (so `0·ln 0` counts as 0).
pub fn neg_entropy(probs: &[f64]) -> f64 {
    probs
        .iter()
        .filter(|p| **p > 0.0)
        .map(|p| p * p.ln())
        .sum()
}

/// `1 + neg_entropy / ln N`.
pub fn entropy_confidence(probs: &[f64]) -> f64 {
    let h_max = (probs.len() as f64).ln();
    1.0 + neg_entropy(probs) / h_max
}

/// `(N·m − 1) / (N − 1)` with `m` the largest probability.
pub fn map_confidence(probs: &[f64]) -> f64 {
    let n = probs.len() as f64;
    let m = probs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (n * m - 1.0) / (n - 1.0)
}

/// Largest minus second-largest probability.
pub fn diff_confidence(probs: &[f64]) -> f64 {
    let mut sorted = probs.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    match sorted.as_slice() {
        [first, second, ..] => first - second,
        [only] => *only,
        [] => 0.0,
    }
}

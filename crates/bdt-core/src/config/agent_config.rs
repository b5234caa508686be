//! Agent configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Scalar parameters governing every decision of one agent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AgentConfig {
    /// Global decision threshold `T`. Default: 0.0.
    pub threshold: Option<f64>,
    /// Reward inverse-temperature. Default: 1.0.
    pub beta: Option<f64>,
    /// Perceptual inverse-temperature. Default: 1.0.
    pub alpha: Option<f64>,
    /// Confidence model: "map" | "diff" | "entropy". Default: "entropy".
    pub confidence_model: Option<String>,
    /// Sample the choice from the posterior instead of taking the arg-max. Default: false.
    pub soft: Option<bool>,
    /// Seed for the random source. Unset means entropy-seeded.
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Returns the effective threshold, defaulting to 0.0.
    pub fn effective_threshold(&self) -> f64 {
        self.threshold.unwrap_or(constants::DEFAULT_THRESHOLD)
    }

    /// Returns the effective reward inverse-temperature, defaulting to 1.0.
    pub fn effective_beta(&self) -> f64 {
        self.beta.unwrap_or(constants::DEFAULT_BETA)
    }

    /// Returns the effective perceptual inverse-temperature, defaulting to 1.0.
    pub fn effective_alpha(&self) -> f64 {
        self.alpha.unwrap_or(constants::DEFAULT_ALPHA)
    }

    /// Returns the effective confidence model name, defaulting to "entropy".
    pub fn effective_confidence_model(&self) -> &str {
        self.confidence_model
            .as_deref()
            .unwrap_or(constants::DEFAULT_CONFIDENCE_MODEL)
    }

    /// Returns the effective soft flag, defaulting to false.
    pub fn effective_soft(&self) -> bool {
        self.soft.unwrap_or(constants::DEFAULT_SOFT)
    }
}

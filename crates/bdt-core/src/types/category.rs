//! Gaussian category.

use serde::Serialize;

use crate::errors::{AgentError, AgentResult};

/// A univariate Gaussian latent signal attached to one decision option.
///
/// Immutable once built. `std_dev` is strictly positive for every
/// value produced by [`Category::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Category {
    mean: f64,
    std_dev: f64,
}

impl Category {
    /// Build a category, rejecting non-finite means and non-positive
    /// or non-finite standard deviations.
    pub fn new(mean: f64, std_dev: f64) -> AgentResult<Self> {
        if !mean.is_finite() {
            return Err(AgentError::invalid_parameter(
                "mean",
                format!("must be finite, got {mean}"),
            ));
        }
        if std_dev <= 0.0 || !std_dev.is_finite() {
            return Err(AgentError::invalid_parameter(
                "std_dev",
                format!("must be positive and finite, got {std_dev}"),
            ));
        }
        Ok(Self { mean, std_dev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

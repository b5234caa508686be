//! Posterior over the two options of one decision.

use bdt_core::constants::{PAIR_SIZE, POSTERIOR_SUM_TOLERANCE};
use bdt_core::errors::{AgentError, AgentResult};
use bdt_core::types::CategoryId;
use serde::Serialize;

/// Check that `pair` holds exactly two distinct ids.
pub fn validate_pair(pair: &[CategoryId]) -> AgentResult<(&CategoryId, &CategoryId)> {
    match pair {
        [a, b] if a != b => Ok((a, b)),
        [a, _] => Err(AgentError::InvalidPair {
            len: PAIR_SIZE,
            reason: format!("ids must be distinct, got '{a}' twice"),
        }),
        _ => Err(AgentError::InvalidPair {
            len: pair.len(),
            reason: format!("expected exactly {PAIR_SIZE} ids"),
        }),
    }
}

/// Probability mass over a decision pair, in pair order.
///
/// Built by [`Posterior::normalize`] from utilities, or by
/// [`Posterior::new`] from explicit probabilities. Entries are
/// non-negative and sum to one as long as the utilities they came
/// from are non-negative; negative utilities (negative rewards) can
/// produce entries outside [0, 1] and are not clamped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Posterior {
    entries: [(CategoryId, f64); 2],
}

impl Posterior {
    /// Build from explicit probabilities. Ids must differ, values
    /// must be non-negative and sum to one within 1e-9.
    pub fn new(a: impl Into<CategoryId>, p_a: f64, b: impl Into<CategoryId>, p_b: f64) -> AgentResult<Self> {
        let (a, b) = (a.into(), b.into());
        if a == b {
            return Err(AgentError::InvalidPair {
                len: PAIR_SIZE,
                reason: format!("ids must be distinct, got '{a}' twice"),
            });
        }
        if !(p_a >= 0.0 && p_b >= 0.0) {
            return Err(AgentError::invalid_parameter(
                "posterior",
                format!("probabilities must be non-negative, got {p_a} and {p_b}"),
            ));
        }
        if ((p_a + p_b) - 1.0).abs() > POSTERIOR_SUM_TOLERANCE {
            return Err(AgentError::invalid_parameter(
                "posterior",
                format!("probabilities must sum to 1, got {}", p_a + p_b),
            ));
        }
        Ok(Self {
            entries: [(a, p_a), (b, p_b)],
        })
    }

    /// Divide each utility by the pair total. A total of exactly 0.0
    /// yields the uniform split instead of dividing by zero.
    pub fn normalize(a: (CategoryId, f64), b: (CategoryId, f64)) -> Self {
        let total = a.1 + b.1;
        if total == 0.0 {
            let uniform = 1.0 / PAIR_SIZE as f64;
            return Self {
                entries: [(a.0, uniform), (b.0, uniform)],
            };
        }
        Self {
            entries: [(a.0, a.1 / total), (b.0, b.1 / total)],
        }
    }

    /// Probability of `id`, if it belongs to the pair.
    pub fn get(&self, id: &CategoryId) -> Option<f64> {
        self.entries.iter().find(|(k, _)| k == id).map(|(_, p)| *p)
    }

    /// Entries in pair order.
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, f64)> {
        self.entries.iter().map(|(k, p)| (k, *p))
    }

    pub fn ids(&self) -> [&CategoryId; 2] {
        [&self.entries[0].0, &self.entries[1].0]
    }

    pub fn probabilities(&self) -> [f64; 2] {
        [self.entries[0].1, self.entries[1].1]
    }

    pub fn sum(&self) -> f64 {
        self.entries[0].1 + self.entries[1].1
    }

    /// Id with the largest mass. Ties go to the first id of the pair.
    pub fn argmax(&self) -> &CategoryId {
        let [(a, p_a), (b, p_b)] = &self.entries;
        if p_b > p_a {
            b
        } else {
            a
        }
    }

    /// First id whose cumulative mass reaches `r`, in pair order.
    /// Falls back to the last id if rounding leaves the total below `r`.
    pub fn sample_at(&self, r: f64) -> &CategoryId {
        let mut acc = 0.0;
        for (id, p) in &self.entries {
            acc += p;
            if acc >= r {
                return id;
            }
        }
        &self.entries[PAIR_SIZE - 1].0
    }
}

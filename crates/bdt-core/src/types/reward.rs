//! Reward pairs and the reward table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::CategoryId;
use crate::constants::{DEFAULT_REWARD_FAILURE, DEFAULT_REWARD_SUCCESS};

/// Payoffs for a category: `success` when the draw falls below
/// threshold, `failure` otherwise.
///
/// Rewards may be negative, but a negative reward raised to a
/// non-integral `beta` yields NaN. Callers keep rewards non-negative
/// whenever `beta` is not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reward {
    pub success: f64,
    pub failure: f64,
}

impl Reward {
    pub fn new(success: f64, failure: f64) -> Self {
        Self { success, failure }
    }
}

impl Default for Reward {
    fn default() -> Self {
        Self {
            success: DEFAULT_REWARD_SUCCESS,
            failure: DEFAULT_REWARD_FAILURE,
        }
    }
}

impl From<(f64, f64)> for Reward {
    fn from((success, failure): (f64, f64)) -> Self {
        Self { success, failure }
    }
}

/// Optional per-category rewards. Missing entries read as `(1.0, 0.0)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RewardTable {
    entries: HashMap<CategoryId, Reward>,
}

impl RewardTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reward pair for `id`, returning the previous entry.
    pub fn insert(&mut self, id: impl Into<CategoryId>, reward: impl Into<Reward>) -> Option<Reward> {
        self.entries.insert(id.into(), reward.into())
    }

    /// Explicit entry for `id`, if any.
    pub fn get(&self, id: &CategoryId) -> Option<Reward> {
        self.entries.get(id).copied()
    }

    /// Entry for `id`, falling back to the default reward.
    pub fn get_or_default(&self, id: &CategoryId) -> Reward {
        self.get(id).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, &Reward)> {
        self.entries.iter()
    }
}

impl<K, R> FromIterator<(K, R)> for RewardTable
where
    K: Into<CategoryId>,
    R: Into<Reward>,
{
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, r)| (k.into(), r.into()))
                .collect(),
        }
    }
}

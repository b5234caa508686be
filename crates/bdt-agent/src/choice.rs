//! Choice policy: arg-max or weighted sampling over the posterior.

use bdt_core::types::CategoryId;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::posterior::Posterior;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoicePolicy {
    /// Deterministic: largest posterior mass, first id on ties.
    #[default]
    ArgMax,
    /// Stochastic: one uniform draw in [0, 1), sampled by cumulative mass.
    Soft,
}

impl ChoicePolicy {
    pub fn from_soft(soft: bool) -> Self {
        if soft {
            Self::Soft
        } else {
            Self::ArgMax
        }
    }

    pub fn is_soft(&self) -> bool {
        matches!(self, Self::Soft)
    }

    /// Pick an id from `posterior`. Consumes exactly one draw from
    /// `rng` under `Soft` and none under `ArgMax`.
    pub fn select<R: RngCore + ?Sized>(&self, posterior: &Posterior, rng: &mut R) -> CategoryId {
        match self {
            Self::ArgMax => posterior.argmax().clone(),
            Self::Soft => {
                let r: f64 = rng.gen();
                posterior.sample_at(r).clone()
            }
        }
    }
}

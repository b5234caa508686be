//! Full trace of one decision, for inspection and plotting.

use bdt_core::types::CategoryId;
use serde::Serialize;

use crate::posterior::Posterior;
use crate::utility::UtilityTerms;

/// Utility terms for one side of the pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTerms {
    pub id: CategoryId,
    #[serde(flatten)]
    pub terms: UtilityTerms,
}

/// Every intermediate the agent computes for a pair, in pair order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionBreakdown {
    pub categories: [CategoryTerms; 2],
    pub posterior: Posterior,
    pub confidence: f64,
}

impl DecisionBreakdown {
    /// Untempered success probability per id, in pair order.
    pub fn raw_success(&self) -> [(&CategoryId, f64); 2] {
        let [a, b] = &self.categories;
        [(&a.id, a.terms.raw_success), (&b.id, b.terms.raw_success)]
    }
}

/// Outcome of [`crate::DecisionAgent::choose`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub choice: CategoryId,
    pub confidence: f64,
    pub posterior: Posterior,
}

impl Decision {
    /// `(choice, confidence)` without the posterior.
    pub fn into_pair(self) -> (CategoryId, f64) {
        (self.choice, self.confidence)
    }
}

//! # bdt-agent
//!
//! Pairwise decision engine. A caller hands a [`DecisionAgent`] two
//! category ids; the agent scores each with a tempered, reward-weighted
//! expected utility, normalizes the pair into a [`Posterior`], and
//! returns a choice (arg-max or sampled) with a scalar confidence.
//!
//! Pipeline per id: [`gaussian`] → [`tempering`] → [`utility`];
//! then [`posterior`] → [`confidence`] and [`choice`].

pub mod agent;
pub mod breakdown;
pub mod choice;
pub mod confidence;
pub mod gaussian;
pub mod posterior;
pub mod sdt;
pub mod tempering;
pub mod utility;

pub use agent::DecisionAgent;
pub use breakdown::{CategoryTerms, Decision, DecisionBreakdown};
pub use choice::ChoicePolicy;
pub use confidence::ConfidenceModel;
pub use posterior::Posterior;
pub use utility::{UtilityParams, UtilityTerms};

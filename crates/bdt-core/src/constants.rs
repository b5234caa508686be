//! Defaults shared by the config layer and the agent.

/// Global decision threshold `T` when none is configured.
pub const DEFAULT_THRESHOLD: f64 = 0.0;

/// Reward inverse-temperature `beta`. 1.0 is linear expected reward.
pub const DEFAULT_BETA: f64 = 1.0;

/// Perceptual inverse-temperature `alpha`. 1.0 leaves success probabilities untouched.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Confidence model used when none is configured.
pub const DEFAULT_CONFIDENCE_MODEL: &str = "entropy";

/// Arg-max choice unless stochastic choice is requested.
pub const DEFAULT_SOFT: bool = false;

/// Reward for success when a category has no reward table entry.
pub const DEFAULT_REWARD_SUCCESS: f64 = 1.0;

/// Reward for failure when a category has no reward table entry.
pub const DEFAULT_REWARD_FAILURE: f64 = 0.0;

/// Recognised confidence model names.
pub const CONFIDENCE_MODELS: [&str; 3] = ["map", "diff", "entropy"];

/// Number of options in one decision.
pub const PAIR_SIZE: usize = 2;

/// Tolerance used when checking that a posterior sums to one.
pub const POSTERIOR_SUM_TOLERANCE: f64 = 1e-9;

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "BDT_LOG";

/// Log filter used when `BDT_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "bdt=info";

//! # bdt-core
//!
//! Foundation crate for the pairwise Bayesian decision engine.
//! Defines identifiers, category and reward types, errors, config,
//! tracing setup, and constants. `bdt-agent` depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{AgentConfig, BdtConfig};
pub use errors::{AgentError, AgentResult, BdtErrorCode, ConfigError};
pub use types::{Category, CategoryId, CategoryRegistry, Reward, RewardTable};

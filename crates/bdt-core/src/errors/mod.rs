//! Error handling for the decision engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod agent_error;
pub mod config_error;
pub mod error_code;

pub use agent_error::{AgentError, AgentResult};
pub use config_error::ConfigError;
pub use error_code::BdtErrorCode;

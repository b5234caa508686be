//! Decision agent errors.

use super::config_error::ConfigError;
use super::error_code::{self, BdtErrorCode};
use crate::types::CategoryId;

/// Errors raised by the decision engine. Always returned to the
/// immediate caller; the engine never retries or recovers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AgentError {
    /// A category or scalar parameter is outside its domain
    /// (e.g. a non-positive standard deviation).
    #[error("invalid parameter {field}: {message}")]
    InvalidParameter { field: String, message: String },

    /// The agent configuration is unusable, e.g. an unknown confidence model.
    #[error("invalid configuration {field}: {message}")]
    InvalidConfiguration { field: String, message: String },

    /// A decision was requested on something other than two distinct ids.
    #[error("invalid pair of {len} ids: {reason}")]
    InvalidPair { len: usize, reason: String },

    /// The pair references an id absent from the category registry.
    #[error("undefined category: {id}")]
    UndefinedCategory { id: CategoryId },
}

/// Convenience alias used throughout the engine.
pub type AgentResult<T> = Result<T, AgentError>;

impl AgentError {
    pub fn invalid_parameter(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_configuration(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl BdtErrorCode for AgentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } => error_code::INVALID_PARAMETER,
            Self::InvalidConfiguration { .. } => error_code::INVALID_CONFIGURATION,
            Self::InvalidPair { .. } => error_code::INVALID_PAIR,
            Self::UndefinedCategory { .. } => error_code::UNDEFINED_CATEGORY,
        }
    }
}

impl From<ConfigError> for AgentError {
    fn from(err: ConfigError) -> Self {
        let field = match &err {
            ConfigError::FileNotFound { path } | ConfigError::ParseError { path, .. } => {
                path.clone()
            }
            ConfigError::ValidationFailed { field, .. } | ConfigError::InvalidValue { field, .. } => {
                field.clone()
            }
            ConfigError::SerializeFailed { .. } => "config".to_string(),
        };
        Self::InvalidConfiguration {
            field,
            message: err.to_string(),
        }
    }
}

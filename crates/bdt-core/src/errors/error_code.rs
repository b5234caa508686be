//! BdtErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable code string
/// that collaborators can match on without parsing messages.
pub trait BdtErrorCode {
    /// Returns the error code string (e.g., "INVALID_PAIR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
pub const INVALID_CONFIGURATION: &str = "INVALID_CONFIGURATION";
pub const INVALID_PAIR: &str = "INVALID_PAIR";
pub const UNDEFINED_CATEGORY: &str = "UNDEFINED_CATEGORY";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

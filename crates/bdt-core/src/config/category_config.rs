//! Category parameters as they appear in TOML.

use serde::{Deserialize, Serialize};

/// Raw `(mean, std_dev)` for one category. Validated when the
/// config is validated or turned into a registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategoryConfig {
    pub mean: f64,
    pub std_dev: f64,
}

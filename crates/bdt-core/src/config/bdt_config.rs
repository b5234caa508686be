//! Top-level configuration document.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AgentConfig, CategoryConfig};
use crate::constants::CONFIDENCE_MODELS;
use crate::errors::{AgentResult, ConfigError};
use crate::types::{CategoryId, CategoryRegistry, Reward, RewardTable};

/// Everything an agent needs: scalar parameters, the category
/// registry, and the optional reward table.
///
/// ```toml
/// [agent]
/// threshold = 0.5
/// confidence_model = "map"
///
/// [categories.A]
/// mean = 1.0
/// std_dev = 1.0
///
/// [rewards.A]
/// success = 2.0
/// failure = 0.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BdtConfig {
    pub agent: AgentConfig,
    pub categories: BTreeMap<CategoryId, CategoryConfig>,
    pub rewards: BTreeMap<CategoryId, Reward>,
}

impl BdtConfig {
    /// Load, parse, and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: BdtConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            categories = config.categories.len(),
            rewards = config.rewards.len(),
            "loaded decision config"
        );

        Ok(config)
    }

    /// Parse a TOML string. Does not validate.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let agent = &self.agent;
        for (field, value) in [
            ("agent.threshold", agent.threshold),
            ("agent.beta", agent.beta),
            ("agent.alpha", agent.alpha),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(ConfigError::InvalidValue {
                        field: field.to_string(),
                        message: format!("must be finite, got {v}"),
                    });
                }
            }
        }

        let model = agent.effective_confidence_model();
        if !CONFIDENCE_MODELS.contains(&model) {
            return Err(ConfigError::ValidationFailed {
                field: "agent.confidence_model".to_string(),
                message: format!(
                    "'{model}' is not one of {}",
                    CONFIDENCE_MODELS.join(", ")
                ),
            });
        }

        for (id, category) in &self.categories {
            if !category.mean.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("categories.{id}.mean"),
                    message: "must be finite".to_string(),
                });
            }
            if category.std_dev <= 0.0 || !category.std_dev.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("categories.{id}.std_dev"),
                    message: "must be positive and finite".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Build the typed category registry.
    pub fn category_registry(&self) -> AgentResult<CategoryRegistry> {
        let mut registry = CategoryRegistry::new();
        for (id, category) in &self.categories {
            registry.register(id.clone(), category.mean, category.std_dev)?;
        }
        Ok(registry)
    }

    /// Build the reward table. Ids without an entry keep the default reward.
    pub fn reward_table(&self) -> RewardTable {
        self.rewards
            .iter()
            .map(|(id, reward)| (id.clone(), *reward))
            .collect()
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeFailed {
            message: e.to_string(),
        })
    }
}

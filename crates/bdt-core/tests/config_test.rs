//! Tests for TOML configuration loading and validation.

use std::io::Write;

use bdt_core::config::BdtConfig;
use bdt_core::errors::{AgentError, ConfigError};
use bdt_core::types::{CategoryId, Reward};

const FULL: &str = r#"
[agent]
threshold = 0.5
beta = 2.0
alpha = 1.5
confidence_model = "map"
soft = true
seed = 7

[categories.A]
mean = 1.0
std_dev = 1.0

[categories.B]
mean = 0.0
std_dev = 2.0

[rewards.A]
success = 3.0
failure = 0.5
"#;

#[test]
fn defaults_match_agent_defaults() {
    let config = BdtConfig::default();
    assert_eq!(config.agent.effective_threshold(), 0.0);
    assert_eq!(config.agent.effective_beta(), 1.0);
    assert_eq!(config.agent.effective_alpha(), 1.0);
    assert_eq!(config.agent.effective_confidence_model(), "entropy");
    assert!(!config.agent.effective_soft());
    assert!(config.agent.seed.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn parses_full_document() {
    let config = BdtConfig::from_toml(FULL).unwrap();
    assert_eq!(config.agent.effective_threshold(), 0.5);
    assert_eq!(config.agent.effective_beta(), 2.0);
    assert_eq!(config.agent.effective_alpha(), 1.5);
    assert_eq!(config.agent.effective_confidence_model(), "map");
    assert!(config.agent.effective_soft());
    assert_eq!(config.agent.seed, Some(7));
    assert_eq!(config.categories.len(), 2);
    assert!(config.validate().is_ok());

    let registry = config.category_registry().unwrap();
    let b = registry.get(&CategoryId::from("B")).unwrap();
    assert_eq!(b.std_dev(), 2.0);

    let rewards = config.reward_table();
    assert_eq!(rewards.get_or_default(&"A".into()), Reward::new(3.0, 0.5));
    assert_eq!(rewards.get_or_default(&"B".into()), Reward::new(1.0, 0.0));
}

#[test]
fn partial_reward_entry_fills_missing_field() {
    let config = BdtConfig::from_toml("[rewards.A]\nsuccess = 4.0\n").unwrap();
    assert_eq!(config.reward_table().get_or_default(&"A".into()), Reward::new(4.0, 0.0));
}

#[test]
fn unknown_confidence_model_fails_validation() {
    let config = BdtConfig::from_toml("[agent]\nconfidence_model = \"median\"\n").unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. } if field == "agent.confidence_model"
    ));
}

#[test]
fn zero_std_dev_fails_validation() {
    let config = BdtConfig::from_toml("[categories.X]\nmean = 0.0\nstd_dev = 0.0\n").unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. } if field == "categories.X.std_dev"
    ));

    let err = config.category_registry().unwrap_err();
    assert!(matches!(err, AgentError::InvalidParameter { .. }));
}

#[test]
fn non_finite_scalar_is_invalid_value() {
    let config = BdtConfig::from_toml("[agent]\nbeta = nan\n").unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue { ref field, .. }) if field == "agent.beta"
    ));
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = BdtConfig::from_toml("[agent\nthreshold = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn unknown_keys_are_ignored() {
    let config = BdtConfig::from_toml("[agent]\nverbose = true\nthreshold = 1.0\n").unwrap();
    assert_eq!(config.agent.effective_threshold(), 1.0);
}

#[test]
fn load_reads_and_validates_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FULL.as_bytes()).unwrap();
    let config = BdtConfig::load(file.path()).unwrap();
    assert_eq!(config.categories.len(), 2);
}

#[test]
fn load_missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = BdtConfig::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn load_rejects_invalid_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[agent]\nconfidence_model = \"argmax\"\n").unwrap();
    assert!(matches!(
        BdtConfig::load(file.path()),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn toml_round_trip_preserves_config() {
    let config = BdtConfig::from_toml(FULL).unwrap();
    let text = config.to_toml().unwrap();
    let reparsed = BdtConfig::from_toml(&text).unwrap();
    assert_eq!(config, reparsed);
}

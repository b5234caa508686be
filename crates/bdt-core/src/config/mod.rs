//! Configuration system for the decision engine.
//! TOML-based: one `[agent]` table plus `[categories.*]` and `[rewards.*]`.

pub mod agent_config;
pub mod bdt_config;
pub mod category_config;

pub use agent_config::AgentConfig;
pub use bdt_config::BdtConfig;
pub use category_config::CategoryConfig;

//! Value types shared by the config layer and the engine.

pub mod category;
pub mod identifiers;
pub mod registry;
pub mod reward;

pub use category::Category;
pub use identifiers::CategoryId;
pub use registry::CategoryRegistry;
pub use reward::{Reward, RewardTable};

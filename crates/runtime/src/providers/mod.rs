//! Provider implementations for enemy behavior and enemy content.

pub mod ai;
pub mod enemy;

pub use ai::AiActionProvider;
pub use enemy::ResilientEnemySource;

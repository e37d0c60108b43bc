//! Runtime orchestration for ATB battles.
//!
//! This crate wires battle-core's engine to the outside world: action
//! providers choose what each combatant does, observers receive read-only
//! snapshots, and the controller runs the tick loop until one side falls.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the traits and errors clients implement or handle
//! - [`controller`] hosts the battle loop and its builder
//! - [`providers`] holds the enemy AI and the fallback-aware enemy source
pub mod api;
pub mod controller;
pub mod providers;

pub use api::{
    ActionProvider, BattleObserver, NullObserver, ProviderError, Result, RuntimeError,
    ScriptedActionProvider, WaitActionProvider,
};
pub use controller::{BattleController, BattleControllerBuilder, ControllerConfig};
pub use providers::{AiActionProvider, ResilientEnemySource};

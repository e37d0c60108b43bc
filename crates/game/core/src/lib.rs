//! Deterministic Active Time Battle rules shared across runtimes and tools.
//!
//! `battle-core` defines the canonical battle rules (combatants, spells, the ATB
//! scheduler, action resolution and the win/loss state machine) and exposes pure
//! APIs with no I/O. All state mutation flows through [`engine::BattleEngine`],
//! and supporting crates depend on the types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod snapshot;
pub mod state;

pub use action::{
    Action, ActionError, ActionOutcome, ActionTransition, AttackAction, MagicAction, SpellEffect,
    TargetIssue, WaitAction,
};
pub use config::BattleConfig;
pub use engine::{BattleEngine, Resolution, ready_order, ticks_until_ready};
pub use env::{BattleEnv, Element, Spell, SpellCatalog};
pub use error::{ConfigurationError, ErrorSeverity, GameError};
pub use snapshot::{BattleSnapshot, CombatantView};
pub use state::{
    BattleLog, BattleState, Combatant, CombatantId, CombatantStats, LogEntry, Outcome,
    ResourceMeter, Side,
};

//! Common error infrastructure for battle-core.
//!
//! This module provides the shared severity classification used by every error
//! type in the crate, plus [`ConfigurationError`] for malformed static data.
//! Action errors live next to the actions they validate in [`crate::action`].
//!
//! # Design Principles
//!
//! - **Type Safety**: Each concern has its own error enum with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Local Recovery**: Action rejections never end a battle; only bad static data is fatal

use crate::state::{Outcome, Side};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - re-prompt for a different choice.
    ///
    /// Examples: not enough MP, target already defeated
    Recoverable,

    /// Validation error - the request itself is malformed.
    ///
    /// Examples: unknown spell name, spell not in the caster's repertoire
    Validation,

    /// Internal error - the caller broke the turn protocol.
    ///
    /// Examples: acting before the gauge is full, acting after the battle ended
    Internal,

    /// Fatal error - the battle cannot start or continue.
    ///
    /// Examples: malformed spell catalog, combatant with zero speed
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the battle loop may re-prompt after this error.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    /// Returns true if this error indicates a bug in the caller.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and test assertions.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Malformed static data detected while building a battle or loading content.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("invalid battle config: {field} must be greater than zero")]
    ZeroConfigValue { field: &'static str },

    #[error("{side} party is empty")]
    EmptyParty { side: Side },

    #[error("combatant has an empty name")]
    EmptyCombatantName,

    #[error("combatant '{name}' must have a positive {stat}")]
    ZeroStat { name: String, stat: &'static str },

    #[error("combatant '{name}' has {stat} above its maximum")]
    ResourceAboveMax { name: String, stat: &'static str },

    #[error("combatant '{name}' has a gauge above {gauge_max}")]
    GaugeAboveMax { name: String, gauge_max: u32 },

    #[error("battle log holds {len} entries but its capacity is {capacity}")]
    LogOverCapacity { len: usize, capacity: usize },

    #[error("battle outcome is recorded as {stored} but party health says {actual}")]
    InconsistentOutcome { stored: Outcome, actual: Outcome },

    #[error("combatant '{name}' knows unknown spell '{spell}'")]
    UnknownSpell { name: String, spell: String },

    #[error("spell has an empty name")]
    EmptySpellName,

    #[error("duplicate spell '{0}'")]
    DuplicateSpell(String),

    #[error("healing spell '{0}' has zero power")]
    InertHealingSpell(String),
}

impl GameError for ConfigurationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroConfigValue { .. } => "CONFIG_ZERO_VALUE",
            Self::EmptyParty { .. } => "CONFIG_EMPTY_PARTY",
            Self::EmptyCombatantName => "CONFIG_EMPTY_COMBATANT_NAME",
            Self::ZeroStat { .. } => "CONFIG_ZERO_STAT",
            Self::ResourceAboveMax { .. } => "CONFIG_RESOURCE_ABOVE_MAX",
            Self::GaugeAboveMax { .. } => "CONFIG_GAUGE_ABOVE_MAX",
            Self::LogOverCapacity { .. } => "CONFIG_LOG_OVER_CAPACITY",
            Self::InconsistentOutcome { .. } => "CONFIG_INCONSISTENT_OUTCOME",
            Self::UnknownSpell { .. } => "CONFIG_UNKNOWN_SPELL",
            Self::EmptySpellName => "CONFIG_EMPTY_SPELL_NAME",
            Self::DuplicateSpell(_) => "CONFIG_DUPLICATE_SPELL",
            Self::InertHealingSpell(_) => "CONFIG_INERT_HEALING_SPELL",
        }
    }
}

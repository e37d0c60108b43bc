//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from battle setup, action providers and the engine so
//! clients can bubble them up with consistent context.
use thiserror::Error;

use battle_core::{ActionError, CombatantId, ConfigurationError, Side};

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Failure of an [`crate::ActionProvider`] to produce a choice.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The player asked to leave the battle.
    #[error("player quit the battle")]
    Quit,

    #[error("no scripted action left for {actor}")]
    Exhausted { actor: CombatantId },

    #[error("failed to read player input")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{side} action provider not set")]
    ProviderNotSet { side: Side },

    #[error("controller requires a battle state or both rosters before building")]
    MissingRoster,

    #[error("failed to set up battle")]
    Setup(#[from] ConfigurationError),

    #[error("battle did not finish within {limit} ticks")]
    TickLimitExceeded { limit: u64 },

    #[error("battle aborted on {actor}'s turn")]
    Aborted { actor: CombatantId },

    #[error("{side} action provider failed")]
    Provider {
        side: Side,
        #[source]
        source: ProviderError,
    },

    /// The engine refused an action for a reason a re-prompt cannot fix.
    #[error(transparent)]
    Engine(#[from] ActionError),
}

impl RuntimeError {
    pub(crate) fn from_provider(side: Side, actor: CombatantId, error: ProviderError) -> Self {
        match error {
            ProviderError::Quit => Self::Aborted { actor },
            source => Self::Provider { side, source },
        }
    }
}

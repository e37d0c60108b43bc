//! Enemy content provider interface.

use battle_core::{ErrorSeverity, GameError};

use crate::template::CombatantTemplate;

/// Failure to produce an enemy roster.
///
/// Always recoverable: callers fall back to [`crate::FallbackTable`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("content provider unavailable: {0}")]
    Unavailable(String),

    #[error("malformed enemy data: {0}")]
    Malformed(String),

    #[error("template '{name}' is invalid: {reason}")]
    InvalidTemplate { name: String, reason: &'static str },

    #[error("no roster for biome '{0}'")]
    UnknownBiome(String),

    #[error("roster for biome '{0}' is empty")]
    EmptyRoster(String),
}

impl GameError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "CONTENT_UNAVAILABLE",
            Self::Malformed(_) => "CONTENT_MALFORMED",
            Self::InvalidTemplate { .. } => "CONTENT_INVALID_TEMPLATE",
            Self::UnknownBiome(_) => "CONTENT_UNKNOWN_BIOME",
            Self::EmptyRoster(_) => "CONTENT_EMPTY_ROSTER",
        }
    }
}

/// Source of enemy rosters keyed by biome.
///
/// Implementations may be static tables, data files, or generative services.
/// Returned templates must already be validated.
pub trait EnemyProvider: Send + Sync {
    /// Produce the enemy roster for `biome`.
    fn roster(&self, biome: &str) -> Result<Vec<CombatantTemplate>, ContentError>;
}

impl<P: EnemyProvider + ?Sized> EnemyProvider for Box<P> {
    fn roster(&self, biome: &str) -> Result<Vec<CombatantTemplate>, ContentError> {
        (**self).roster(biome)
    }
}

impl<P: EnemyProvider + ?Sized> EnemyProvider for &P {
    fn roster(&self, biome: &str) -> Result<Vec<CombatantTemplate>, ContentError> {
        (**self).roster(biome)
    }
}

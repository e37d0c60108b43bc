//! Enemy roster source that never fails.
use tracing::{debug, warn};

use battle_content::{CombatantTemplate, ContentError, EnemyProvider, FallbackTable};
use battle_core::GameError;

/// Wraps a primary [`EnemyProvider`] and degrades to the [`FallbackTable`]
/// whenever it errors or hands back an unusable roster.
pub struct ResilientEnemySource<P> {
    primary: P,
}

impl<P: EnemyProvider> ResilientEnemySource<P> {
    pub fn new(primary: P) -> Self {
        Self { primary }
    }

    /// Roster for `biome`. Always non-empty and validated.
    pub fn roster(&self, biome: &str) -> Vec<CombatantTemplate> {
        match self.primary.roster(biome).and_then(|roster| checked(biome, roster)) {
            Ok(roster) => {
                debug!(target: "runtime::content", biome, enemies = roster.len(), "enemy roster ready");
                roster
            }
            Err(error) => {
                warn!(
                    target: "runtime::content",
                    biome,
                    code = error.error_code(),
                    %error,
                    "enemy provider failed; using fallback table"
                );
                vec![FallbackTable::template(biome)]
            }
        }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }
}

fn checked(
    biome: &str,
    roster: Vec<CombatantTemplate>,
) -> Result<Vec<CombatantTemplate>, ContentError> {
    if roster.is_empty() {
        return Err(ContentError::EmptyRoster(biome.to_owned()));
    }
    roster.into_iter().map(CombatantTemplate::validated).collect()
}

impl<P: EnemyProvider> EnemyProvider for ResilientEnemySource<P> {
    fn roster(&self, biome: &str) -> Result<Vec<CombatantTemplate>, ContentError> {
        Ok(ResilientEnemySource::roster(self, biome))
    }
}

//! Authoritative battle state representation.
//!
//! This module owns the data structures that describe combatants, the battle
//! log and outcome bookkeeping. Runtime layers clone or query this state but
//! mutate it exclusively through [`crate::engine::BattleEngine`].
pub mod combatant;
pub mod log;

pub use combatant::{Combatant, CombatantId, CombatantStats, ResourceMeter, Side};
pub use log::{BattleLog, LogEntry};

use crate::env::BattleEnv;
use crate::error::ConfigurationError;

/// Win/loss state machine of a battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    #[default]
    Ongoing,
    /// Every enemy combatant is down.
    Victory,
    /// Every player combatant is down.
    Defeat,
}

impl Outcome {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// Canonical snapshot of one battle.
///
/// Owns every combatant and the log for the battle's lifetime. Serializing this
/// value mid-combat and restoring it resumes the battle exactly where it left off.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    /// Player party followed by the enemy party, in roster order.
    pub combatants: Vec<Combatant>,
    pub log: BattleLog,
    pub outcome: Outcome,
    /// Number of scheduler ticks elapsed.
    pub tick: u64,
    /// Number of actions resolved so far (including forfeits).
    pub action_nonce: u64,
}

impl BattleState {
    /// Builds a battle from the two rosters, validating all static data.
    ///
    /// Side tags are taken from the roster a combatant is listed in, and gauges
    /// above `gauge_max` are clamped.
    pub fn new(
        players: Vec<Combatant>,
        enemies: Vec<Combatant>,
        env: &BattleEnv<'_>,
    ) -> Result<Self, ConfigurationError> {
        env.config.validate()?;

        if players.is_empty() {
            return Err(ConfigurationError::EmptyParty { side: Side::Player });
        }
        if enemies.is_empty() {
            return Err(ConfigurationError::EmptyParty { side: Side::Enemy });
        }

        let tagged = players
            .into_iter()
            .map(|c| (Side::Player, c))
            .chain(enemies.into_iter().map(|c| (Side::Enemy, c)));

        let mut combatants = Vec::new();
        for (side, mut combatant) in tagged {
            combatant.side = side;
            combatant.gauge = combatant.gauge.min(env.config.gauge_max);
            check_combatant(&combatant, env)?;
            combatants.push(combatant);
        }

        Ok(Self {
            combatants,
            log: BattleLog::with_capacity(env.config.log_capacity),
            outcome: Outcome::Ongoing,
            tick: 0,
            action_nonce: 0,
        })
    }

    /// Re-checks a state that did not come from [`Self::new`], such as a
    /// deserialized snapshot, against the same rules plus log and outcome
    /// bookkeeping.
    pub fn validate(&self, env: &BattleEnv<'_>) -> Result<(), ConfigurationError> {
        env.config.validate()?;
        for side in [Side::Player, Side::Enemy] {
            if self.side(side).next().is_none() {
                return Err(ConfigurationError::EmptyParty { side });
            }
        }
        for combatant in &self.combatants {
            check_combatant(combatant, env)?;
        }

        let (len, capacity) = (self.log.len(), self.log.capacity());
        if capacity == 0 {
            return Err(ConfigurationError::ZeroConfigValue {
                field: "log_capacity",
            });
        }
        if len > capacity {
            return Err(ConfigurationError::LogOverCapacity { len, capacity });
        }

        let actual = self.evaluate_outcome();
        if self.outcome != actual {
            return Err(ConfigurationError::InconsistentOutcome {
                stored: self.outcome,
                actual,
            });
        }
        Ok(())
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.get(id.0)
    }

    pub fn combatant_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.combatants.get_mut(id.0)
    }

    /// All combatants with their ids, in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (CombatantId, &Combatant)> {
        self.combatants
            .iter()
            .enumerate()
            .map(|(index, c)| (CombatantId(index), c))
    }

    /// Members of one side, in roster order.
    pub fn side(&self, side: Side) -> impl Iterator<Item = (CombatantId, &Combatant)> {
        self.iter().filter(move |(_, c)| c.side == side)
    }

    /// Living members of one side, in roster order.
    pub fn living(&self, side: Side) -> impl Iterator<Item = (CombatantId, &Combatant)> {
        self.side(side).filter(|(_, c)| c.is_alive())
    }

    pub fn is_side_defeated(&self, side: Side) -> bool {
        self.living(side).next().is_none()
    }

    /// Derives the outcome from current HP values.
    pub fn evaluate_outcome(&self) -> Outcome {
        if self.is_side_defeated(Side::Enemy) {
            Outcome::Victory
        } else if self.is_side_defeated(Side::Player) {
            Outcome::Defeat
        } else {
            Outcome::Ongoing
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }
}

fn check_combatant(combatant: &Combatant, env: &BattleEnv<'_>) -> Result<(), ConfigurationError> {
    combatant.validate()?;
    if combatant.gauge > env.config.gauge_max {
        return Err(ConfigurationError::GaugeAboveMax {
            name: combatant.name.clone(),
            gauge_max: env.config.gauge_max,
        });
    }
    if let Some(unknown) = combatant
        .spells
        .iter()
        .find(|name| env.spells.get(name).is_none())
    {
        return Err(ConfigurationError::UnknownSpell {
            name: combatant.name.clone(),
            spell: unknown.clone(),
        });
    }
    Ok(())
}

//! Read-only views of a battle for presentation layers.
//!
//! Snapshots are plain data detached from the engine: renderers can hold on to
//! them without borrowing the battle state.

use crate::config::BattleConfig;
use crate::env::Element;
use crate::state::{BattleState, Combatant, CombatantId, Outcome, Side};

/// Display data for one combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantView {
    pub id: CombatantId,
    pub name: String,
    pub side: Side,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub gauge: u32,
    pub gauge_max: u32,
    pub weakness: Option<Element>,
    pub alive: bool,
}

impl CombatantView {
    fn new(id: CombatantId, combatant: &Combatant, gauge_max: u32) -> Self {
        Self {
            id,
            name: combatant.name.clone(),
            side: combatant.side,
            hp: combatant.hp.current,
            max_hp: combatant.hp.maximum,
            mp: combatant.mp.current,
            max_mp: combatant.mp.maximum,
            gauge: combatant.gauge,
            gauge_max,
            weakness: combatant.weakness,
            alive: combatant.is_alive(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.alive && self.gauge >= self.gauge_max
    }
}

/// Battle-wide view captured after a resolved action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSnapshot {
    pub tick: u64,
    pub actions: u64,
    pub outcome: Outcome,
    pub combatants: Vec<CombatantView>,
    /// Newest log messages, oldest first.
    pub log_tail: Vec<String>,
}

impl BattleSnapshot {
    pub fn capture(state: &BattleState, config: &BattleConfig, log_tail: usize) -> Self {
        Self {
            tick: state.tick,
            actions: state.action_nonce,
            outcome: state.outcome,
            combatants: state
                .iter()
                .map(|(id, c)| CombatantView::new(id, c, config.gauge_max))
                .collect(),
            log_tail: state
                .log
                .tail(log_tail)
                .map(|entry| entry.message.clone())
                .collect(),
        }
    }

    pub fn side(&self, side: Side) -> impl Iterator<Item = &CombatantView> {
        self.combatants.iter().filter(move |view| view.side == side)
    }
}

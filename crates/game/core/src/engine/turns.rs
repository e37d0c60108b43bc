use std::cmp::Reverse;

use crate::config::BattleConfig;
use crate::state::{BattleState, Combatant, CombatantId};

use super::BattleEngine;

/// Ready combatants in resolution order.
///
/// Order: descending Speed, then roster order (players before enemies, then
/// original index). Dead combatants are never ready.
pub fn ready_order(state: &BattleState, gauge_max: u32) -> Vec<CombatantId> {
    let mut ready: Vec<(CombatantId, u32)> = state
        .iter()
        .filter(|(_, c)| c.is_ready(gauge_max))
        .map(|(id, c)| (id, c.stats.speed))
        .collect();
    ready.sort_by_key(|&(id, speed)| (Reverse(speed), id));
    ready.into_iter().map(|(id, _)| id).collect()
}

/// Ticks a living combatant still needs before it becomes ready.
///
/// Returns `None` for dead combatants, which never become ready.
pub fn ticks_until_ready(combatant: &Combatant, config: &BattleConfig) -> Option<u64> {
    if !combatant.is_alive() {
        return None;
    }
    let missing = config.gauge_max.saturating_sub(combatant.gauge) as u64;
    let per_tick = (combatant.stats.speed as u64 * config.gauge_rate as u64).max(1);
    Some(missing.div_ceil(per_tick))
}

/// Turn scheduling methods for BattleEngine.
impl<'a> BattleEngine<'a> {
    /// Returns the number of ticks elapsed.
    pub fn clock(&self) -> u64 {
        self.state.tick
    }

    /// Advances every living combatant's gauge by `speed × gauge_rate` and
    /// returns the combatants ready to act, in resolution order.
    ///
    /// Does nothing once the battle has ended.
    pub fn tick(&mut self) -> Vec<CombatantId> {
        if self.state.is_over() {
            return Vec::new();
        }

        let config = self.env.config;
        self.state.tick += 1;
        for combatant in self.state.combatants.iter_mut().filter(|c| c.is_alive()) {
            let delta = combatant.stats.speed.saturating_mul(config.gauge_rate);
            combatant.advance_gauge(delta, config.gauge_max);
        }

        self.ready_order()
    }

    /// Combatants currently ready to act, in resolution order.
    pub fn ready_order(&self) -> Vec<CombatantId> {
        ready_order(&*self.state, self.env.config.gauge_max)
    }

    /// Ticks until the next combatant becomes ready (0 if one already is).
    pub fn ticks_until_next_turn(&self) -> Option<u64> {
        self.state
            .combatants
            .iter()
            .filter_map(|c| ticks_until_ready(c, self.env.config))
            .min()
    }
}

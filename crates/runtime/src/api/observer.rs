//! Presentation hook.
use battle_core::{ActionError, BattleSnapshot, CombatantId, Resolution};

/// Receives read-only battle snapshots as the controller makes progress.
///
/// Observers never see or touch [`battle_core::BattleState`] directly.
pub trait BattleObserver {
    /// Before the first tick.
    fn on_start(&mut self, _snapshot: &BattleSnapshot) {}

    /// After every resolved action, forfeits included.
    fn on_action(&mut self, resolution: &Resolution, snapshot: &BattleSnapshot);

    /// After the engine refused an action. State is unchanged.
    fn on_rejected(&mut self, _actor: CombatantId, _error: &ActionError) {}

    /// Once, when the battle reaches Victory or Defeat.
    fn on_finish(&mut self, _snapshot: &BattleSnapshot) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl BattleObserver for NullObserver {
    fn on_action(&mut self, _resolution: &Resolution, _snapshot: &BattleSnapshot) {}
}

//! Action provider abstraction.
//!
//! The controller asks the provider registered for a combatant's side whenever
//! that combatant's gauge fills. Providers only choose; the engine validates.
use std::collections::VecDeque;

use battle_core::{Action, ActionError, BattleState, CombatantId, SpellCatalog};

use super::errors::ProviderError;

/// Source of actions for one side of the battle.
pub trait ActionProvider {
    /// Choose an action for `actor` given the current battle state.
    ///
    /// # Arguments
    /// * `actor` - The ready combatant that needs to act
    /// * `state` - Read-only view of the current battle
    /// * `spells` - Catalog the actor's spell names resolve against
    fn provide_action(
        &mut self,
        actor: CombatantId,
        state: &BattleState,
        spells: &SpellCatalog,
    ) -> Result<Action, ProviderError>;

    /// Called when the last action from this provider was rejected.
    ///
    /// The controller asks again right after, until the rejection limit is hit.
    fn on_rejected(&mut self, _actor: CombatantId, _error: &ActionError) {}
}

impl<P: ActionProvider + ?Sized> ActionProvider for Box<P> {
    fn provide_action(
        &mut self,
        actor: CombatantId,
        state: &BattleState,
        spells: &SpellCatalog,
    ) -> Result<Action, ProviderError> {
        (**self).provide_action(actor, state, spells)
    }

    fn on_rejected(&mut self, actor: CombatantId, error: &ActionError) {
        (**self).on_rejected(actor, error)
    }
}

/// A simple action provider that always returns Wait action.
/// Useful for testing or as a fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct WaitActionProvider;

impl ActionProvider for WaitActionProvider {
    fn provide_action(
        &mut self,
        actor: CombatantId,
        _state: &BattleState,
        _spells: &SpellCatalog,
    ) -> Result<Action, ProviderError> {
        Ok(Action::wait(actor))
    }
}

/// Replays a fixed queue of actions, one per request, regardless of which
/// combatant is asking. Fails with [`ProviderError::Exhausted`] once empty.
#[derive(Clone, Debug, Default)]
pub struct ScriptedActionProvider {
    script: VecDeque<Action>,
    rejected: usize,
}

impl ScriptedActionProvider {
    pub fn new(script: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: script.into_iter().collect(),
            rejected: 0,
        }
    }

    pub fn push(&mut self, action: Action) {
        self.script.push_back(action);
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Number of scripted actions the engine refused.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl ActionProvider for ScriptedActionProvider {
    fn provide_action(
        &mut self,
        actor: CombatantId,
        _state: &BattleState,
        _spells: &SpellCatalog,
    ) -> Result<Action, ProviderError> {
        self.script
            .pop_front()
            .ok_or(ProviderError::Exhausted { actor })
    }

    fn on_rejected(&mut self, _actor: CombatantId, _error: &ActionError) {
        self.rejected += 1;
    }
}

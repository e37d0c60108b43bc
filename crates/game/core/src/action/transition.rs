use crate::action::{ActionError, ActionOutcome};
use crate::env::BattleEnv;
use crate::state::{BattleState, CombatantId};

/// Defines how a concrete action variant mutates battle state.
///
/// `pre_validate` must perform every check that can reject the action, so that a
/// rejected action never leaves partial effects behind. `apply` may assume
/// `pre_validate` succeeded. Gauge reset, logging and outcome evaluation are the
/// engine's job and must not be done here.
pub trait ActionTransition {
    /// The combatant performing the action.
    fn actor(&self) -> CombatantId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &BattleState, _env: &BattleEnv<'_>) -> Result<(), ActionError> {
        Ok(())
    }

    /// Applies the action by mutating the battle state directly.
    fn apply(
        &self,
        state: &mut BattleState,
        env: &BattleEnv<'_>,
    ) -> Result<ActionOutcome, ActionError>;
}

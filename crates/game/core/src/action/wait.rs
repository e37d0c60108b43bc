use crate::action::{ActionError, ActionOutcome, ActionTransition};
use crate::env::BattleEnv;
use crate::state::{BattleState, CombatantId};

/// Wait action - the actor gives up this turn and starts refilling its gauge.
///
/// Unlike a no-op, waiting consumes the full gauge, so the actor's next turn
/// comes one whole cycle later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitAction {
    pub actor: CombatantId,
}

impl WaitAction {
    pub fn new(actor: CombatantId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for WaitAction {
    fn actor(&self) -> CombatantId {
        self.actor
    }

    fn apply(
        &self,
        _state: &mut BattleState,
        _env: &BattleEnv<'_>,
    ) -> Result<ActionOutcome, ActionError> {
        Ok(ActionOutcome::Wait)
    }
}

use crate::action::{ActionError, ActionOutcome, ActionTransition, living_target};
use crate::combat::physical_damage;
use crate::env::BattleEnv;
use crate::state::{BattleState, CombatantId};

/// Physical strike against a single living target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub actor: CombatantId,
    pub target: CombatantId,
}

impl AttackAction {
    pub fn new(actor: CombatantId, target: CombatantId) -> Self {
        Self { actor, target }
    }
}

impl ActionTransition for AttackAction {
    fn actor(&self) -> CombatantId {
        self.actor
    }

    fn pre_validate(&self, state: &BattleState, _env: &BattleEnv<'_>) -> Result<(), ActionError> {
        living_target(state, self.target).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut BattleState,
        env: &BattleEnv<'_>,
    ) -> Result<ActionOutcome, ActionError> {
        let strength = state
            .combatant(self.actor)
            .ok_or(ActionError::UnknownActor(self.actor))?
            .stats
            .strength;
        let damage = physical_damage(strength, env.config.attack_mitigation);

        let target = state
            .combatant_mut(self.target)
            .ok_or(ActionError::missing_target(self.target))?;
        let dealt = target.apply_damage(damage);

        Ok(ActionOutcome::Attack {
            target: self.target,
            damage: dealt,
        })
    }
}

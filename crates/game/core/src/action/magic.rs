use crate::action::{ActionError, ActionOutcome, ActionTransition, SpellEffect, living_target};
use crate::combat::{heal_amount, spell_damage};
use crate::env::{BattleEnv, Spell};
use crate::state::{BattleState, CombatantId};

/// Casts a catalog spell on one target.
///
/// Healing spells restore HP to the target (usually an ally or the caster);
/// every other element deals damage, doubled on the target's weakness.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagicAction {
    pub actor: CombatantId,
    pub spell: String,
    pub target: CombatantId,
}

impl MagicAction {
    pub fn new(actor: CombatantId, spell: impl Into<String>, target: CombatantId) -> Self {
        Self {
            actor,
            spell: spell.into(),
            target,
        }
    }

    fn resolve_spell<'e>(&self, env: &BattleEnv<'e>) -> Result<&'e Spell, ActionError> {
        env.spells
            .get(&self.spell)
            .ok_or_else(|| ActionError::UnknownSpell(self.spell.clone()))
    }
}

impl ActionTransition for MagicAction {
    fn actor(&self) -> CombatantId {
        self.actor
    }

    fn pre_validate(&self, state: &BattleState, env: &BattleEnv<'_>) -> Result<(), ActionError> {
        let spell = self.resolve_spell(env)?;
        let caster = state
            .combatant(self.actor)
            .ok_or(ActionError::UnknownActor(self.actor))?;

        if !caster.knows_spell(&spell.name) {
            return Err(ActionError::SpellNotKnown {
                actor: self.actor,
                spell: spell.name.clone(),
            });
        }
        if !env.spells.can_cast(caster, spell) {
            return Err(ActionError::InsufficientMp {
                required: spell.mp_cost,
                available: caster.mp.current,
            });
        }

        living_target(state, self.target).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut BattleState,
        env: &BattleEnv<'_>,
    ) -> Result<ActionOutcome, ActionError> {
        let spell = self.resolve_spell(env)?;

        let caster = state
            .combatant_mut(self.actor)
            .ok_or(ActionError::UnknownActor(self.actor))?;
        caster.spend_mp(spell.mp_cost)?;
        let magic = caster.stats.magic;

        let target = state
            .combatant_mut(self.target)
            .ok_or(ActionError::missing_target(self.target))?;

        let effect = if spell.is_healing() {
            SpellEffect::Heal {
                amount: target.apply_heal(heal_amount(spell, magic)),
            }
        } else {
            let (damage, weakness) = spell_damage(spell, magic, target.weakness);
            SpellEffect::Damage {
                amount: target.apply_damage(damage),
                weakness,
            }
        };

        Ok(ActionOutcome::Spell {
            spell: spell.name.clone(),
            target: self.target,
            effect,
        })
    }
}

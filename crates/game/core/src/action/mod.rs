//! Battle actions and their resolution rules.
//!
//! Each action kind is a small struct implementing [`ActionTransition`]. The
//! [`Action`] enum is what providers hand to the engine.
mod attack;
mod error;
mod magic;
mod transition;
mod wait;

pub use attack::AttackAction;
pub use error::{ActionError, TargetIssue};
pub use magic::MagicAction;
pub use transition::ActionTransition;
pub use wait::WaitAction;

use crate::state::{BattleState, Combatant, CombatantId};

/// A chosen action for one acting combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Attack(AttackAction),
    Magic(MagicAction),
    Wait(WaitAction),
}

impl Action {
    pub fn attack(actor: CombatantId, target: CombatantId) -> Self {
        Self::Attack(AttackAction::new(actor, target))
    }

    pub fn magic(actor: CombatantId, spell: impl Into<String>, target: CombatantId) -> Self {
        Self::Magic(MagicAction::new(actor, spell, target))
    }

    pub fn wait(actor: CombatantId) -> Self {
        Self::Wait(WaitAction::new(actor))
    }

    pub fn actor(&self) -> CombatantId {
        match self {
            Self::Attack(action) => action.actor(),
            Self::Magic(action) => action.actor(),
            Self::Wait(action) => action.actor(),
        }
    }

    /// Short label for logs and menus.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Attack(_) => "attack",
            Self::Magic(_) => "magic",
            Self::Wait(_) => "wait",
        }
    }
}

/// Effect of a resolved spell on its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellEffect {
    /// HP removed from the target, after clamping.
    Damage { amount: u32, weakness: bool },
    /// HP restored to the target, after clamping.
    Heal { amount: u32 },
}

/// What a resolved action did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    Attack {
        target: CombatantId,
        damage: u32,
    },
    Spell {
        spell: String,
        target: CombatantId,
        effect: SpellEffect,
    },
    Wait,
    /// The turn was given up after repeated rejected choices.
    Forfeit,
}

impl ActionOutcome {
    /// Human-readable log line for this outcome, read against the post-action state.
    pub fn narrate(&self, actor: &Combatant, state: &BattleState) -> String {
        let name_of = |id: CombatantId| {
            state
                .combatant(id)
                .map_or_else(|| id.to_string(), |c| c.name.clone())
        };
        let knockout = |id: CombatantId| match state.combatant(id) {
            Some(target) if !target.is_alive() => format!(" {} is defeated!", target.name),
            _ => String::new(),
        };

        match self {
            Self::Attack { target, damage } => format!(
                "{} attacks {} for {} damage!{}",
                actor.name,
                name_of(*target),
                damage,
                knockout(*target)
            ),
            Self::Spell {
                spell,
                target,
                effect: SpellEffect::Damage { amount, weakness },
            } => format!(
                "{} casts {} on {} for {} damage!{}{}",
                actor.name,
                spell,
                name_of(*target),
                amount,
                if *weakness { " Weakness!" } else { "" },
                knockout(*target)
            ),
            Self::Spell {
                spell,
                target,
                effect: SpellEffect::Heal { amount },
            } => format!(
                "{} casts {} on {} and restores {} HP!",
                actor.name,
                spell,
                name_of(*target),
                amount
            ),
            Self::Wait => format!("{} waits.", actor.name),
            Self::Forfeit => format!("{} hesitates and loses the turn.", actor.name),
        }
    }
}

/// Looks up a target that must still be standing.
pub(crate) fn living_target(
    state: &BattleState,
    target: CombatantId,
) -> Result<&Combatant, ActionError> {
    let combatant = state
        .combatant(target)
        .ok_or(ActionError::missing_target(target))?;
    if !combatant.is_alive() {
        return Err(ActionError::defeated_target(target));
    }
    Ok(combatant)
}

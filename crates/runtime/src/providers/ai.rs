//! Seeded enemy AI.
//!
//! Mostly attacks the weakest opponent; otherwise casts a random affordable
//! spell, aiming offensive magic at a matching weakness when one is exposed.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use battle_core::{Action, BattleState, Combatant, CombatantId, Side, Spell, SpellCatalog};

use crate::api::{ActionProvider, ProviderError};

/// Random policy with a fixed seed, so a battle replays identically.
#[derive(Clone, Debug)]
pub struct AiActionProvider {
    rng: StdRng,
    attack_chance: f64,
}

impl AiActionProvider {
    pub const DEFAULT_ATTACK_CHANCE: f64 = 0.7;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            attack_chance: Self::DEFAULT_ATTACK_CHANCE,
        }
    }

    /// Unseeded; decisions differ between runs.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            attack_chance: Self::DEFAULT_ATTACK_CHANCE,
        }
    }

    /// Probability of a plain attack when a spell is also available. Clamped to `0..=1`.
    #[must_use]
    pub fn with_attack_chance(mut self, chance: f64) -> Self {
        self.attack_chance = chance.clamp(0.0, 1.0);
        self
    }

    fn decide(
        &mut self,
        actor: CombatantId,
        me: &Combatant,
        state: &BattleState,
        spells: &SpellCatalog,
    ) -> Action {
        let opponent_side = me.side.opponent();
        let Some(weakest) = weakest_opponent(state, opponent_side) else {
            return Action::wait(actor);
        };

        let wounded = me.hp.current < me.hp.maximum;
        let castable: Vec<&Spell> = spells
            .castable_for(me)
            .filter(|spell| !spell.is_healing() || wounded)
            .collect();

        if castable.is_empty() || self.rng.gen_bool(self.attack_chance) {
            return Action::attack(actor, weakest);
        }

        let spell = castable[self.rng.gen_range(0..castable.len())];
        let target = if spell.is_healing() {
            actor
        } else {
            state
                .living(opponent_side)
                .find(|(_, foe)| spell.exploits(foe.weakness))
                .map_or(weakest, |(id, _)| id)
        };
        Action::magic(actor, spell.name.clone(), target)
    }
}

impl ActionProvider for AiActionProvider {
    fn provide_action(
        &mut self,
        actor: CombatantId,
        state: &BattleState,
        spells: &SpellCatalog,
    ) -> Result<Action, ProviderError> {
        let Some(me) = state.combatant(actor) else {
            return Ok(Action::wait(actor));
        };
        let action = self.decide(actor, me, state, spells);
        debug!(
            target: "runtime::ai",
            actor = %actor,
            name = %me.name,
            action = action.label(),
            "AI chose action"
        );
        Ok(action)
    }
}

/// Living combatant on `side` with the lowest HP percentage; ties go to roster order.
fn weakest_opponent(state: &BattleState, side: Side) -> Option<CombatantId> {
    state
        .living(side)
        .min_by_key(|(id, foe)| (foe.hp_percent(), *id))
        .map(|(id, _)| id)
}

//! Battle engine: the single entry point for mutating a [`BattleState`].
//!
//! The engine borrows the state mutably together with the read-only
//! [`BattleEnv`] for the duration of one or more operations. Scheduling lives in
//! [`turns`]; action resolution is implemented here on top of
//! [`ActionTransition`].
mod turns;

pub use turns::{ready_order, ticks_until_ready};

use crate::action::{Action, ActionError, ActionOutcome, ActionTransition};
use crate::env::BattleEnv;
use crate::snapshot::BattleSnapshot;
use crate::state::{BattleState, CombatantId, Outcome};

/// Result of one resolved action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub actor: CombatantId,
    pub outcome: ActionOutcome,
    /// Battle outcome after the action was applied.
    pub battle: Outcome,
    /// Sequential id of this action within the battle.
    pub nonce: u64,
}

pub struct BattleEngine<'a> {
    state: &'a mut BattleState,
    env: BattleEnv<'a>,
}

impl<'a> BattleEngine<'a> {
    pub fn new(state: &'a mut BattleState, env: BattleEnv<'a>) -> Self {
        Self { state, env }
    }

    pub fn state(&self) -> &BattleState {
        self.state
    }

    pub fn env(&self) -> &BattleEnv<'a> {
        &self.env
    }

    /// Read-only view for presentation layers.
    pub fn snapshot(&self, log_tail: usize) -> BattleSnapshot {
        BattleSnapshot::capture(self.state, self.env.config, log_tail)
    }

    /// Validates and applies one action.
    ///
    /// On success the actor's gauge is reset, exactly one log entry is appended
    /// and the battle outcome is re-evaluated. On error nothing has changed.
    pub fn execute(&mut self, action: &Action) -> Result<Resolution, ActionError> {
        match action {
            Action::Attack(transition) => self.run(transition),
            Action::Magic(transition) => self.run(transition),
            Action::Wait(transition) => self.run(transition),
        }
    }

    /// Like [`Self::execute`], but only for the combatant whose turn it is.
    ///
    /// An action naming any other actor is rejected with
    /// [`ActionError::WrongActor`] and changes nothing.
    pub fn execute_turn(
        &mut self,
        expected: CombatantId,
        action: &Action,
    ) -> Result<Resolution, ActionError> {
        let got = action.actor();
        if got != expected {
            return Err(ActionError::WrongActor { expected, got });
        }
        self.execute(action)
    }

    /// Ends a ready combatant's turn without any effect.
    ///
    /// Used when a combatant cannot produce a valid action. Like any action it
    /// resets the gauge and is logged.
    pub fn forfeit(&mut self, actor: CombatantId) -> Result<Resolution, ActionError> {
        self.check_actor(actor)?;
        Ok(self.finish(actor, ActionOutcome::Forfeit))
    }

    fn run<T: ActionTransition>(&mut self, transition: &T) -> Result<Resolution, ActionError> {
        let actor = transition.actor();
        self.check_actor(actor)?;
        transition.pre_validate(self.state, &self.env)?;
        let outcome = transition.apply(self.state, &self.env)?;
        Ok(self.finish(actor, outcome))
    }

    /// Shared pre-conditions: battle running, actor present, alive and ready.
    fn check_actor(&self, actor: CombatantId) -> Result<(), ActionError> {
        if self.state.is_over() {
            return Err(ActionError::BattleOver(self.state.outcome));
        }
        let combatant = self
            .state
            .combatant(actor)
            .ok_or(ActionError::UnknownActor(actor))?;
        if !combatant.is_alive() {
            return Err(ActionError::ActorNotReady {
                actor,
                reason: "combatant is down",
            });
        }
        if !combatant.is_ready(self.env.config.gauge_max) {
            return Err(ActionError::ActorNotReady {
                actor,
                reason: "gauge is not full",
            });
        }
        Ok(())
    }

    fn finish(&mut self, actor: CombatantId, outcome: ActionOutcome) -> Resolution {
        let tick = self.state.tick;
        let message = match self.state.combatant(actor) {
            Some(combatant) => outcome.narrate(combatant, self.state),
            None => String::new(),
        };

        if let Some(combatant) = self.state.combatant_mut(actor) {
            combatant.reset_gauge();
        }
        self.state.log.push(tick, message);
        let nonce = self.state.action_nonce;
        self.state.action_nonce += 1;
        self.state.outcome = self.state.evaluate_outcome();

        Resolution {
            actor,
            outcome,
            battle: self.state.outcome,
            nonce,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::SpellEffect;
    use crate::config::BattleConfig;
    use crate::env::{Element, SpellCatalog};
    use crate::error::GameError;
    use crate::state::{Combatant, CombatantStats, Side};

    const P0: CombatantId = CombatantId(0);
    const P1: CombatantId = CombatantId(1);

    fn battle(players: Vec<Combatant>, enemies: Vec<Combatant>, config: &BattleConfig) -> BattleState {
        BattleState::new(
            players,
            enemies,
            &BattleEnv::new(SpellCatalog::standard(), config),
        )
        .unwrap()
    }

    fn mage(magic: u32) -> Combatant {
        Combatant::player("Terra", 100, 50, CombatantStats::new(16, magic, 12))
            .with_spells(["Fire", "Blizzard", "Thunder", "Cure"])
            .with_gauge(100)
    }

    fn dummy(hp: u32) -> Combatant {
        Combatant::enemy("Dummy", hp, 20, CombatantStats::new(10, 10, 5))
    }

    #[test]
    fn turn_is_bound_to_the_expected_actor() {
        let config = BattleConfig::default();
        let mut state = battle(vec![mage(10)], vec![dummy(50).with_gauge(100)], &config);
        let before = state.clone();
        let mut engine = BattleEngine::new(&mut state, BattleEnv::new(SpellCatalog::standard(), &config));

        let err = engine.execute_turn(P0, &Action::attack(P1, P0)).unwrap_err();
        assert_eq!(err, ActionError::WrongActor { expected: P0, got: P1 });
        assert!(err.severity().is_recoverable());
        assert_eq!(state, before);

        let mut engine = BattleEngine::new(&mut state, BattleEnv::new(SpellCatalog::standard(), &config));
        assert!(engine.execute_turn(P0, &Action::wait(P0)).is_ok());
    }

    #[test]
    fn higher_speed_is_ready_sooner() {
        let config = BattleConfig::default();
        let mut state = battle(
            vec![Combatant::player("Quick", 50, 0, CombatantStats::new(5, 5, 20))],
            vec![Combatant::enemy("Slow", 50, 0, CombatantStats::new(5, 5, 7))],
            &config,
        );
        let mut engine = BattleEngine::new(&mut state, BattleEnv::new(SpellCatalog::standard(), &config));

        let mut first_ready = [None, None];
        for tick in 1..=20u64 {
            for id in engine.tick() {
                first_ready[id.0].get_or_insert(tick);
                engine.execute(&Action::wait(id)).unwrap();
            }
        }

        assert_eq!(first_ready, [Some(5), Some(15)]);
    }

    #[test]
    fn speed_monotonicity_over_range() {
        let config = BattleConfig::default();
        let mut previous = u64::MAX;
        for speed in 1..=120 {
            let c = Combatant::player("P", 10, 0, CombatantStats::new(1, 1, speed));
            let ticks = ticks_until_ready(&c, &config).unwrap();
            assert!(ticks <= previous, "speed {speed} slower than speed {}", speed - 1);
            previous = ticks;
        }
        let ten = Combatant::player("P", 10, 0, CombatantStats::new(1, 1, 10));
        assert_eq!(ticks_until_ready(&ten, &config), Some(10));
    }

    #[test]
    fn simultaneous_readiness_uses_tie_break() {
        let config = BattleConfig::default();
        let mut state = battle(
            vec![
                Combatant::player("A", 50, 0, CombatantStats::new(5, 5, 10)),
                Combatant::player("B", 50, 0, CombatantStats::new(5, 5, 10)),
            ],
            vec![Combatant::enemy("C", 50, 0, CombatantStats::new(5, 5, 5)).with_gauge(50)],
            &config,
        );
        let mut engine = BattleEngine::new(&mut state, BattleEnv::new(SpellCatalog::standard(), &config));

        let mut ready = Vec::new();
        while ready.is_empty() {
            ready = engine.tick();
        }
        assert_eq!(ready, vec![CombatantId(0), CombatantId(1), CombatantId(2)]);
    }

    #[test]
    fn faster_enemy_precedes_slower_player() {
        let config = BattleConfig::default();
        let state = battle(
            vec![Combatant::player("A", 50, 0, CombatantStats::new(5, 5, 8)).with_gauge(100)],
            vec![Combatant::enemy("B", 50, 0, CombatantStats::new(5, 5, 9)).with_gauge(100)],
            &config,
        );
        assert_eq!(ready_order(&state, 100), vec![CombatantId(1), CombatantId(0)]);
    }

    #[test]
    fn dead_combatants_do_not_accrue() {
        let config = BattleConfig::default();
        let mut state = battle(
            vec![Combatant::player("A", 50, 0, CombatantStats::new(5, 5, 10))],
            vec![
                Combatant::enemy("B", 50, 0, CombatantStats::new(5, 5, 10)).with_hp(0),
                Combatant::enemy("C", 50, 0, CombatantStats::new(5, 5, 1)),
            ],
            &config,
        );
        let mut engine = BattleEngine::new(&mut state, BattleEnv::new(SpellCatalog::standard(), &config));
        for _ in 0..10 {
            engine.tick();
        }
        assert_eq!(state.combatants[1].gauge, 0);
        assert_eq!(state.combatants[0].gauge, 100);
        assert_eq!(state.tick, 10);
    }

    #[test]
    fn weakness_doubles_spell_damage() {
        let config = BattleConfig::default();
        let mut plain = battle(vec![mage(10)], vec![dummy(500)], &config);
        let mut weak = battle(vec![mage(10)], vec![dummy(500).with_weakness(Element::Fire)], &config);

        for (state, expected, flagged) in [(&mut plain, 30, false), (&mut weak, 60, true)] {
            let mut engine = BattleEngine::new(state, BattleEnv::new(SpellCatalog::standard(), &config));
            let resolution = engine.execute(&Action::magic(P0, "Fire", P1)).unwrap();
            assert_eq!(
                resolution.outcome,
                ActionOutcome::Spell {
                    spell: "Fire".into(),
                    target: P1,
                    effect: SpellEffect::Damage {
                        amount: expected,
                        weakness: flagged
                    },
                }
            );
            assert_eq!(state.combatants[1].hp.current, 500 - expected);
            assert_eq!(state.combatants[0].mp.current, 40);
        }
    }

    #[test]
    fn insufficient_mp_changes_nothing() {
        let config = BattleConfig::default();
        let mut state = battle(vec![mage(10).with_mp(9)], vec![dummy(80)], &config);
        let before = state.clone();
        let mut engine = BattleEngine::new(&mut state, BattleEnv::new(SpellCatalog::standard(), &config));

        let err = engine.execute(&Action::magic(P0, "Thunder", P1)).unwrap_err();
        assert_eq!(
            err,
            ActionError::InsufficientMp {
                required: 10,
                available: 9
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn one_attack_wins_against_one_hp() {
        let config = BattleConfig::default();
        let mut state = battle(
            vec![Combatant::player("Terra", 100, 0, CombatantStats::new(16, 18, 12)).with_gauge(100)],
            vec![dummy(1)],
            &config,
        );
        let mut engine = BattleEngine::new(&mut state, BattleEnv::new(SpellCatalog::standard(), &config));

        let resolution = engine.execute(&Action::attack(P0, P1)).unwrap();
        assert_eq!(resolution.battle, Outcome::Victory);
        assert_eq!(
            resolution.outcome,
            ActionOutcome::Attack {
                target: P1,
                damage: 1
            }
        );
        assert!(engine.tick().is_empty());
        assert_eq!(
            engine.execute(&Action::wait(P0)),
            Err(ActionError::BattleOver(Outcome::Victory))
        );
    }

    #[test]
    fn one_spell_wins_against_one_hp() {
        let config = BattleConfig::default();
        let mut state = battle(vec![mage(18)], vec![dummy(1)], &config);
        let mut engine = BattleEngine::new(&mut state, BattleEnv::new(SpellCatalog::standard(), &config));
        let resolution = engine.execute(&Action::magic(P0, "Blizzard", P1)).unwrap();
        assert_eq!(resolution.battle, Outcome::Victory);
    }

    #[test]
    fn wait_resets_gauge_without_touching_resources() {
        let config = BattleConfig::default();
        let mut state = battle(vec![mage(10).with_hp(70).with_mp(12)], vec![dummy(80)], &config);
        let mut engine = BattleEngine::new(&mut state, BattleEnv::new(SpellCatalog::standard(), &config));

        let resolution = engine.execute(&Action::wait(P0)).unwrap();
        assert_eq!(resolution.outcome, ActionOutcome::Wait);
        assert_eq!(state.combatants[0].gauge, 0);
        assert_eq!(state.combatants[0].hp.current, 70);
        assert_eq!(state.combatants[0].mp.current, 12);
        assert_eq!(state.combatants[1].hp.current, 80);
        assert_eq!(state.log.messages(), vec!["Terra waits."]);
    }

    #[test]
    fn cure_heals_ally_without_weakness_bonus() {
        let config = BattleConfig::default();
        let mut state = battle(
            vec![
                mage(10),
                Combatant::player("Locke", 100, 0, CombatantStats::new(14, 5, 14))
                    .with_hp(20)
                    .with_weakness(Element::Fire),
            ],
            vec![dummy(50)],
            &config,
        );
        let mut engine = BattleEngine::new(&mut state, BattleEnv::new(SpellCatalog::standard(), &config));

        let resolution = engine.execute(&Action::magic(P0, "cure", P1)).unwrap();
        assert_eq!(
            resolution.outcome,
            ActionOutcome::Spell {
                spell: "Cure".into(),
                target: P1,
                effect: SpellEffect::Heal { amount: 40 },
            }
        );
        assert_eq!(state.combatants[1].hp.current, 60);
        assert_eq!(state.combatants[0].mp.current, 42);
    }

    #[test]
    fn dead_targets_are_rejected() {
        let config = BattleConfig::default();
        let mut state = battle(
            vec![mage(10), Combatant::player("Locke", 100, 0, CombatantStats::new(14, 5, 14)).with_hp(0)],
            vec![dummy(50), dummy(50).with_hp(0)],
            &config,
        );
        let mut engine = BattleEngine::new(&mut state, BattleEnv::new(SpellCatalog::standard(), &config));

        assert_eq!(
            engine.execute(&Action::attack(P0, CombatantId(3))),
            Err(ActionError::defeated_target(CombatantId(3)))
        );
        assert_eq!(
            engine.execute(&Action::magic(P0, "Cure", P1)),
            Err(ActionError::defeated_target(P1))
        );
        assert_eq!(
            engine.execute(&Action::attack(P0, CombatantId(9))),
            Err(ActionError::missing_target(CombatantId(9)))
        );
        assert!(state.log.is_empty());
    }

    #[test]
    fn actors_must_be_ready() {
        let config = BattleConfig::default();
        let mut state = battle(vec![mage(10).with_gauge(40)], vec![dummy(50)], &config);
        let mut engine = BattleEngine::new(&mut state, BattleEnv::new(SpellCatalog::standard(), &config));
        assert!(matches!(
            engine.execute(&Action::attack(P0, P1)),
            Err(ActionError::ActorNotReady { .. })
        ));
    }

    #[test]
    fn spells_outside_repertoire_are_rejected() {
        let config = BattleConfig::default();
        let mut state = battle(
            vec![mage(10).with_spells(["Cure"])],
            vec![dummy(50)],
            &config,
        );
        let mut engine = BattleEngine::new(&mut state, BattleEnv::new(SpellCatalog::standard(), &config));
        assert_eq!(
            engine.execute(&Action::magic(P0, "Fire", P1)),
            Err(ActionError::SpellNotKnown {
                actor: P0,
                spell: "Fire".into()
            })
        );
        assert_eq!(
            engine.execute(&Action::magic(P0, "Flare", P1)),
            Err(ActionError::UnknownSpell("Flare".into()))
        );
    }

    #[test]
    fn forfeit_resets_gauge_and_logs() {
        let config = BattleConfig::default();
        let mut state = battle(vec![mage(10)], vec![dummy(50)], &config);
        let mut engine = BattleEngine::new(&mut state, BattleEnv::new(SpellCatalog::standard(), &config));
        let resolution = engine.forfeit(P0).unwrap();
        assert_eq!(resolution.outcome, ActionOutcome::Forfeit);
        assert_eq!(resolution.nonce, 0);
        assert_eq!(state.combatants[0].gauge, 0);
        assert_eq!(state.action_nonce, 1);
        assert_eq!(state.log.len(), 1);
    }

    #[test]
    fn resources_stay_in_bounds_over_long_fight() {
        let config = BattleConfig::default();
        let mut state = battle(
            vec![
                mage(18),
                Combatant::player("Locke", 90, 10, CombatantStats::new(14, 8, 14))
                    .with_spells(["Cure"]),
            ],
            vec![
                Combatant::enemy("Armor", 400, 40, CombatantStats::new(15, 12, 8))
                    .with_spells(["Fire", "Thunder"]),
            ],
            &config,
        );
        let mut engine = BattleEngine::new(&mut state, BattleEnv::new(SpellCatalog::standard(), &config));

        let script = ["Fire", "Cure", "attack", "Thunder", "wait", "Blizzard"];
        let mut step = 0usize;
        for _ in 0..400 {
            for actor in engine.tick() {
                if engine.state().is_over() {
                    break;
                }
                if !engine.state().combatant(actor).is_some_and(|c| c.is_alive()) {
                    continue;
                }
                let side = engine.state().combatant(actor).map(|c| c.side);
                let target = match side {
                    Some(Side::Player) => CombatantId(2),
                    _ => P0,
                };
                let choice = script[step % script.len()];
                step += 1;
                let action = match choice {
                    "attack" => Action::attack(actor, target),
                    "wait" => Action::wait(actor),
                    "Cure" => Action::magic(actor, "Cure", actor),
                    spell => Action::magic(actor, spell, target),
                };
                if engine.execute(&action).is_err() {
                    engine.forfeit(actor).unwrap();
                }
                for c in &engine.state().combatants {
                    assert!(c.hp.current <= c.hp.maximum);
                    assert!(c.mp.current <= c.mp.maximum);
                    assert!(c.gauge <= config.gauge_max);
                }
            }
        }
        assert!(engine.state().action_nonce > 0);
    }
}

//! Saving a battle mid-combat and resuming it must not change how it plays out.
use battle_core::{Action, BattleState, Combatant, CombatantId, CombatantStats, Element, Outcome};
use battle_runtime::{BattleController, ScriptedActionProvider};

const TERRA: CombatantId = CombatantId(0);
const SERPENT: CombatantId = CombatantId(1);

fn opening() -> BattleController {
    BattleController::builder()
        .roster(
            vec![
                Combatant::player("Terra", 100, 50, CombatantStats::new(16, 18, 10))
                    .with_spells(["Fire", "Blizzard", "Thunder", "Cure"]),
            ],
            vec![
                Combatant::enemy("Sky Serpent", 70, 30, CombatantStats::new(12, 16, 9))
                    .with_weakness(Element::Ice)
                    .with_spells(["Fire", "Cure"]),
            ],
        )
        // Terra acts on ticks 10 and 20, the serpent on 12 and 24.
        .player_provider(ScriptedActionProvider::new([
            Action::attack(TERRA, SERPENT),
            Action::magic(TERRA, "Fire", SERPENT),
        ]))
        .enemy_provider(ScriptedActionProvider::new([
            Action::attack(SERPENT, TERRA),
            Action::magic(SERPENT, "Cure", SERPENT),
        ]))
        .build()
        .unwrap()
}

fn resume(state: BattleState) -> BattleController {
    BattleController::builder()
        .initial_state(state)
        .player_provider(ScriptedActionProvider::new([
            Action::attack(TERRA, SERPENT),
            Action::magic(TERRA, "Blizzard", SERPENT),
        ]))
        .enemy_provider(ScriptedActionProvider::new([Action::magic(SERPENT, "Fire", TERRA)]))
        .build()
        .unwrap()
}

fn midpoint() -> BattleState {
    let mut controller = opening();
    while controller.state().action_nonce < 4 {
        controller.step().unwrap();
    }
    let state = controller.into_state();
    assert_eq!(state.tick, 24);
    assert_eq!(state.combatants[1].hp.current, 62);
    state
}

fn finish(state: BattleState) -> BattleState {
    let mut controller = resume(state);
    assert_eq!(controller.run().unwrap(), Outcome::Victory);
    controller.into_state()
}

#[test]
fn json_round_trip_resumes_identically() {
    let saved = midpoint();
    let json = serde_json::to_string(&saved).unwrap();
    let restored: BattleState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, saved);

    let expected = finish(saved);
    let actual = finish(restored);
    assert_eq!(actual, expected);
    assert_eq!(actual.log.messages(), expected.log.messages());
}

#[test]
fn bincode_round_trip_resumes_identically() {
    let saved = midpoint();
    let bytes = bincode::serialize(&saved).unwrap();
    let restored: BattleState = bincode::deserialize(&bytes).unwrap();
    assert_eq!(restored, saved);

    let end = finish(restored);
    assert_eq!(end, finish(saved));
    assert_eq!(end.tick, 40);
    assert_eq!(end.combatants[0].hp.current, 52);
    assert_eq!(end.combatants[0].mp.current, 30);
    assert_eq!(
        end.log.last().map(|entry| entry.message.as_str()),
        Some("Terra casts Blizzard on Sky Serpent for 46 damage! Weakness! Sky Serpent is defeated!")
    );
}

//! Summoning integration tests.

use chain_tactics::{
    Affinity, CreatureInPlay, GameError, InstanceId, Phase, PlayerId,
};

mod common;
use common::{advance_to, engine_with_orders, six};

#[test]
fn test_summon_takes_leftmost_slot_and_pays_cost() {
    let mut engine = engine_with_orders(&six("goblin"), &six("river_sprite"));
    advance_to(&mut engine, Phase::Summon);

    engine.summon_creature(PlayerId::A, "goblin").unwrap();

    let state = engine.state();
    let a = state.player(PlayerId::A);
    let goblin = a.field[0].as_ref().expect("summoned");
    assert_eq!(goblin.current_atk, 2);
    assert_eq!(goblin.current_hp, 1);
    assert_eq!(a.hand.len(), 5);
    assert_eq!(a.energy.get(Affinity::Fire), 5);
    // The summon counts as the action; priority flips.
    assert_eq!(state.active_player, PlayerId::B);
    assert!(state.log.iter().any(|l| l == "A summons Goblin Raider to slot 1"));
}

#[test]
fn test_summon_fills_gaps_leftmost_first() {
    let mut engine = engine_with_orders(&six("goblin"), &six("river_sprite"));
    advance_to(&mut engine, Phase::Summon);
    let card = engine
        .state()
        .library
        .get(&"goblin".into())
        .unwrap()
        .as_creature()
        .unwrap()
        .clone();
    engine.state_mut().players[PlayerId::A].field[0] =
        Some(CreatureInPlay::summon(InstanceId(50), card.clone()));
    engine.state_mut().players[PlayerId::A].field[2] =
        Some(CreatureInPlay::summon(InstanceId(51), card));

    engine.summon_creature(PlayerId::A, "goblin").unwrap();
    assert!(engine.state().player(PlayerId::A).field[1].is_some());
}

#[test]
fn test_instance_ids_are_sequential() {
    let mut engine = engine_with_orders(&six("goblin"), &six("river_sprite"));
    advance_to(&mut engine, Phase::Summon);

    engine.summon_creature(PlayerId::A, "goblin").unwrap();
    engine.summon_creature(PlayerId::B, "river_sprite").unwrap();

    let first = engine.state().player(PlayerId::A).field[0].as_ref().unwrap();
    let second = engine.state().player(PlayerId::B).field[0].as_ref().unwrap();
    assert_eq!(format!("{}", first.instance), "creature_1");
    assert_eq!(format!("{}", second.instance), "creature_2");
}

// =============================================================================
// Validation failures leave state untouched
// =============================================================================

#[test]
fn test_summon_outside_summon_phase() {
    let mut engine = engine_with_orders(&six("goblin"), &six("river_sprite"));
    let result = engine.summon_creature(PlayerId::A, "goblin");
    assert!(matches!(
        result,
        Err(GameError::WrongPhase { expected: Phase::Summon, actual: Phase::Prepare })
    ));
}

#[test]
fn test_summon_out_of_turn() {
    let mut engine = engine_with_orders(&six("goblin"), &six("river_sprite"));
    advance_to(&mut engine, Phase::Summon);
    let result = engine.summon_creature(PlayerId::B, "river_sprite");
    assert!(matches!(result, Err(GameError::NotYourTurn(PlayerId::B))));
}

#[test]
fn test_summon_card_not_in_hand() {
    let mut engine = engine_with_orders(&six("goblin"), &six("river_sprite"));
    advance_to(&mut engine, Phase::Summon);
    let result = engine.summon_creature(PlayerId::A, "duskwing");
    assert!(matches!(result, Err(GameError::CardNotInHand(_))));
}

#[test]
fn test_summon_rejects_tactic() {
    let mut engine = engine_with_orders(
        &["foresight", "goblin", "goblin", "goblin", "goblin", "goblin"],
        &six("river_sprite"),
    );
    advance_to(&mut engine, Phase::Summon);
    let result = engine.summon_creature(PlayerId::A, "foresight");
    assert!(matches!(result, Err(GameError::WrongCardType { .. })));
}

#[test]
fn test_summon_with_insufficient_energy() {
    let mut engine = engine_with_orders(
        &["storm_drake", "goblin", "goblin", "goblin", "goblin", "goblin"],
        &six("river_sprite"),
    );
    advance_to(&mut engine, Phase::Summon);

    // One Energy unit against a cost of four.
    let result = engine.summon_creature(PlayerId::A, "storm_drake");
    assert!(matches!(result, Err(GameError::InsufficientEnergy { .. })));

    let a = engine.state().player(PlayerId::A);
    assert_eq!(a.hand.len(), 6);
    assert_eq!(a.energy.get(Affinity::Energy), 1);
    assert_eq!(engine.state().active_player, PlayerId::A);
}

#[test]
fn test_summon_with_full_field() {
    let mut engine = engine_with_orders(&six("goblin"), &six("river_sprite"));
    advance_to(&mut engine, Phase::Summon);
    let card = engine
        .state()
        .library
        .get(&"goblin".into())
        .unwrap()
        .as_creature()
        .unwrap()
        .clone();
    for slot in 0..chain_tactics::FIELD_SLOTS {
        engine.state_mut().players[PlayerId::A].field[slot] =
            Some(CreatureInPlay::summon(InstanceId(60 + slot as u32), card.clone()));
    }

    let result = engine.summon_creature(PlayerId::A, "goblin");
    assert!(matches!(result, Err(GameError::FieldFull)));
    assert_eq!(engine.state().player(PlayerId::A).hand.len(), 6);
}

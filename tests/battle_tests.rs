//! Battle resolution integration tests.
//!
//! Fields are staged directly through `state_mut`, then the round is
//! passed through to Battle.

use chain_tactics::{
    CreatureInPlay, GameEngine, InstanceId, Phase, PlayerId,
};

mod common;
use common::{advance_to, engine_with_orders, six};

/// Stage a creature into a specific slot, bypassing summoning rules.
fn put(engine: &mut GameEngine, player: PlayerId, slot: usize, card: &str, instance: u32) {
    let def = engine
        .state()
        .library
        .get(&card.into())
        .expect("known card")
        .as_creature()
        .expect("creature card")
        .clone();
    engine.state_mut().players[player].field[slot] =
        Some(CreatureInPlay::summon(InstanceId(instance), def));
}

fn staged_engine() -> GameEngine {
    engine_with_orders(&six("goblin"), &six("river_sprite"))
}

fn run_battle(engine: &mut GameEngine) {
    advance_to(engine, Phase::End);
}

// =============================================================================
// Aggregate damage
// =============================================================================

#[test]
fn test_damage_lands_in_slot_order() {
    let mut engine = staged_engine();
    put(&mut engine, PlayerId::A, 0, "goblin", 101); // 2/1
    put(&mut engine, PlayerId::A, 1, "stone_guard", 102); // 1/4
    put(&mut engine, PlayerId::B, 0, "duskwing", 103); // 3/2

    run_battle(&mut engine);

    let state = engine.state();
    // B's 3 attack: the goblin absorbs 1 and dies, the guard takes 2.
    let a = state.player(PlayerId::A);
    assert!(a.field[0].is_none());
    assert_eq!(a.field[1].as_ref().map(|c| c.current_hp), Some(2));
    assert!(a.trash.contains(&"goblin".into()));

    // A's 3 attack kills the duskwing; the surplus is wasted.
    let b = state.player(PlayerId::B);
    assert!(b.field[0].is_none());
    assert!(b.trash.contains(&"duskwing".into()));

    let result = state.round_result.as_ref().expect("round result");
    assert_eq!(result.winner, Some(PlayerId::A));
    assert_eq!(result.reason, "Battle resolved");
}

#[test]
fn test_symmetric_boards_tie_to_non_first_player() {
    let mut engine = staged_engine();
    put(&mut engine, PlayerId::A, 0, "goblin", 101);
    put(&mut engine, PlayerId::B, 0, "goblin", 102);

    run_battle(&mut engine);
    let result = engine.state().round_result.as_ref().expect("round result");
    assert_eq!(result.winner, Some(PlayerId::B));
}

#[test]
fn test_round_result_recorded_once() {
    let mut engine = staged_engine();
    put(&mut engine, PlayerId::A, 0, "goblin", 101);

    run_battle(&mut engine);
    let state = engine.state();
    assert_eq!(state.match_score[PlayerId::A], 1);
    assert_eq!(state.match_score[PlayerId::B], 0);
}

// =============================================================================
// Swarm merging
// =============================================================================

#[test]
fn test_three_survivors_merge_into_first_slot() {
    let mut engine = staged_engine();
    put(&mut engine, PlayerId::A, 1, "goblin", 101);
    put(&mut engine, PlayerId::A, 3, "goblin", 102);
    put(&mut engine, PlayerId::A, 4, "goblin", 103);

    run_battle(&mut engine);

    let a = engine.state().player(PlayerId::A);
    let merged = a.field[1].as_ref().expect("merged creature");
    assert_eq!(merged.instance, InstanceId(101));
    assert_eq!(merged.current_atk, 6);
    assert_eq!(merged.current_hp, 3);
    assert!(a.field[3].is_none());
    assert!(a.field[4].is_none());
    // The vacated copies are trashed.
    assert_eq!(
        a.trash.iter().filter(|id| *id == &"goblin".into()).count(),
        2
    );
}

#[test]
fn test_five_copies_get_swarm_bonus() {
    let mut engine = staged_engine();
    for slot in 0..5 {
        put(&mut engine, PlayerId::A, slot, "goblin", 101 + slot as u32);
    }

    run_battle(&mut engine);

    let merged = engine.state().player(PlayerId::A).field[0]
        .as_ref()
        .expect("merged creature");
    // Sums 10/5, then a floored 10% bonus: 11/5.
    assert_eq!(merged.current_atk, 11);
    assert_eq!(merged.current_hp, 5);
}

#[test]
fn test_mixed_pairs_do_not_merge() {
    let mut engine = staged_engine();
    put(&mut engine, PlayerId::A, 0, "goblin", 101);
    put(&mut engine, PlayerId::A, 1, "goblin", 102);
    put(&mut engine, PlayerId::A, 2, "river_sprite", 103);
    put(&mut engine, PlayerId::A, 3, "river_sprite", 104);

    run_battle(&mut engine);

    let a = engine.state().player(PlayerId::A);
    assert_eq!(a.field_count(), 4);
}

#[test]
fn test_merge_counts_survivors_not_entrants() {
    let mut engine = staged_engine();
    put(&mut engine, PlayerId::A, 0, "goblin", 101);
    put(&mut engine, PlayerId::A, 1, "goblin", 102);
    put(&mut engine, PlayerId::A, 2, "goblin", 103);
    // 1 incoming damage kills the slot-0 goblin before merging.
    put(&mut engine, PlayerId::B, 0, "river_sprite", 104); // 1/2

    run_battle(&mut engine);

    let a = engine.state().player(PlayerId::A);
    // Only two goblins survived, below the merge threshold.
    assert!(a.field[0].is_none());
    assert!(a.field[1].is_some());
    assert!(a.field[2].is_some());
    assert_eq!(a.field[1].as_ref().map(|c| c.current_atk), Some(2));
}

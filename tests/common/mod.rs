//! Shared fixtures for the integration tests.
//!
//! Engines here use preset deck orders so draws, energy pools, and
//! random effects are fully predictable from the fixed seed.
#![allow(dead_code)]

use chain_tactics::{EngineOptions, GameEngine, Phase, PlayerId};

/// An engine with fixed deck orders (front of the list drawn first)
/// and the default seed.
pub fn engine_with_orders(a: &[&str], b: &[&str]) -> GameEngine {
    GameEngine::new(
        EngineOptions::new()
            .with_seed(42u32)
            .with_deck_order(PlayerId::A, a.iter().copied())
            .with_deck_order(PlayerId::B, b.iter().copied()),
    )
    .expect("engine construction")
}

/// Six copies of one card, the exact draw-phase allotment.
pub fn six(card: &str) -> Vec<&str> {
    vec![card; 6]
}

/// Pass with whoever holds priority until the engine sits in `phase`.
pub fn advance_to(engine: &mut GameEngine, phase: Phase) {
    while engine.state().phase != phase {
        let active = engine.state().active_player;
        engine.pass(active).expect("pass");
    }
}

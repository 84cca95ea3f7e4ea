//! # chain-tactics
//!
//! A deterministic rules engine for a two-player card game played as a
//! best-of-three match. Each round runs a fixed phase cycle; creatures
//! fight in aggregate during Battle, tactics resolve through a short
//! LIFO chain, and reactive triggers settle through a FIFO queue.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness flows through one seeded RNG
//!    with a fixed bit-level contract. Same seed, same inputs, same
//!    match, on every platform.
//!
//! 2. **Data-Driven Cards**: Card behavior is declarative. Effects are
//!    a closed tagged union interpreted by the resolver; no card ships
//!    code.
//!
//! 3. **Errors Over Panics**: Illegal operations return `GameError`
//!    and leave documented state behind. Round-ending conditions are
//!    recorded on the state, not raised.
//!
//! ## Modules
//!
//! - `core`: player identity, energy economy, RNG, errors
//! - `cards`: card definitions, the catalogue, deck lists
//! - `state`: phases, per-player state, the chain, `GameState`
//! - `effects`: declarative effects, targeting, the interpreter
//! - `triggers`: events, conditions, registered reactive effects
//! - `engine`: the `GameEngine` operations and round lifecycle
//!
//! ## Example
//!
//! ```
//! use chain_tactics::{EngineOptions, GameEngine, PlayerId, Phase};
//!
//! let mut engine = GameEngine::new(
//!     EngineOptions::new().with_seed(7u32),
//! ).unwrap();
//! assert_eq!(engine.state().phase, Phase::Prepare);
//!
//! // Both players decline to act; the round advances to Summon.
//! engine.pass(PlayerId::A).unwrap();
//! engine.pass(PlayerId::B).unwrap();
//! assert_eq!(engine.state().phase, Phase::Summon);
//! ```

pub mod cards;
pub mod core;
pub mod effects;
pub mod engine;
pub mod state;
pub mod triggers;

// Re-export commonly used types
pub use crate::core::{
    Affinity, EnergyPool, GameError, GameResult, GameRng, PlayerId, PlayerPair, Seed,
};

pub use crate::cards::{
    load_deck_catalogue, load_starter_decks, CardDefinition, CardId, CardKind, CardLibrary,
    CreatureCard, DeckEntry, DeckList, TacticCard,
};

pub use crate::state::{
    ChainPlay, ChainState, CreatureInPlay, GameState, InstanceId, Phase, PlayerState,
    RoundResult, TemporaryEffect, CHAIN_LIMIT, FIELD_SLOTS,
};

pub use crate::effects::{
    AffinityFilter, EffectDefinition, EffectDuration, EffectKind, EffectOverride,
    EffectResolver, OwnerScope, SummonParams, TargetRef, TargetSelector, Zone,
};

pub use crate::triggers::{
    Trigger, TriggerCondition, TriggerContext, TriggerDuration, TriggerEvent, TriggerId,
};

pub use crate::engine::{EngineOptions, GameEngine};

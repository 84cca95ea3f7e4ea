//! The rules engine.
//!
//! `GameEngine` owns one `GameState` and exposes the player-facing
//! operations. Construction immediately starts round 1, so a fresh
//! engine is always sitting at the Prepare phase (or already holds a
//! round result if a draw exhausted a deck).

mod battle;
mod chain;
mod phases;

use std::sync::Arc;

use crate::cards::{load_starter_decks, CardLibrary, DeckList};
use crate::core::{GameError, GameResult, PlayerId, PlayerPair, Seed};
use crate::effects::EffectResolver;
use crate::state::{CreatureInPlay, GameState, Phase};
use crate::triggers::{Trigger, TriggerEvent, TriggerId};

/// Engine construction options.
///
/// Defaults reproduce a standard match: seed 42, player A first, the
/// starter catalogue and deck lists, shuffled deck orders.
#[derive(Clone, Debug, Default)]
pub struct EngineOptions {
    seed: Option<Seed>,
    first_player: Option<PlayerId>,
    decks: Vec<DeckList>,
    library: Option<CardLibrary>,
    deck_orders: PlayerPair<Option<Vec<crate::cards::CardId>>>,
}

impl EngineOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the match RNG (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Choose who acts first each round (builder pattern).
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = Some(player);
        self
    }

    /// Use explicit deck lists; the first is player A's, the second
    /// player B's, and a single list is shared (builder pattern).
    #[must_use]
    pub fn with_decks(mut self, decks: impl IntoIterator<Item = DeckList>) -> Self {
        self.decks = decks.into_iter().collect();
        self
    }

    /// Use a custom card library (builder pattern).
    #[must_use]
    pub fn with_library(mut self, library: CardLibrary) -> Self {
        self.library = Some(library);
        self
    }

    /// Fix one player's deck order instead of shuffling, front first
    /// (builder pattern).
    #[must_use]
    pub fn with_deck_order(
        mut self,
        player: PlayerId,
        order: impl IntoIterator<Item = impl Into<crate::cards::CardId>>,
    ) -> Self {
        self.deck_orders[player] = Some(order.into_iter().map(Into::into).collect());
        self
    }
}

/// A best-of-three match in progress.
#[derive(Clone, Debug)]
pub struct GameEngine {
    state: GameState,
    /// Preset deck orders, reapplied on every round reset.
    deck_orders: PlayerPair<Option<Vec<crate::cards::CardId>>>,
}

impl GameEngine {
    /// Build an engine and start round 1.
    pub fn new(options: EngineOptions) -> GameResult<Self> {
        let library = match options.library {
            Some(library) => Arc::new(library),
            None => Arc::new(CardLibrary::load_starter()?),
        };
        let decks = if options.decks.is_empty() {
            load_starter_decks()?
        } else {
            options.decks
        };
        let deck_a = decks[0].clone();
        let deck_b = decks.get(1).cloned().unwrap_or_else(|| deck_a.clone());
        let seed = options.seed.unwrap_or_default();
        let first_player = options.first_player.unwrap_or(PlayerId::A);

        let state = GameState::new(
            library,
            PlayerPair::new(deck_a, deck_b),
            first_player,
            &seed,
        );
        let mut engine = Self {
            state,
            deck_orders: options.deck_orders,
        };
        engine.start_round()?;
        Ok(engine)
    }

    /// A default engine: seed 42, starter data, A first.
    pub fn standard() -> GameResult<Self> {
        Self::new(EngineOptions::new())
    }

    /// The live state, read-only.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The live state, mutable. Direct mutation bypasses the rules;
    /// intended for scenario setup and tooling.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// The round log so far.
    #[must_use]
    pub fn log(&self) -> &[String] {
        &self.state.log
    }

    /// Register a reactive trigger, returning its assigned id.
    pub fn register_trigger(&mut self, trigger: Trigger) -> TriggerId {
        let id = self.state.alloc_trigger_id();
        let owner = trigger.owner;
        let mut trigger = trigger;
        trigger.id = id;
        self.state.players[owner].triggers.push(trigger);
        id
    }

    /// Summon a creature from hand into the leftmost empty slot.
    ///
    /// Summon phase only, active player only, no open chain. The cost
    /// is paid before the card leaves the hand; a failed validation
    /// leaves the state untouched.
    pub fn summon_creature(
        &mut self,
        player: PlayerId,
        card_id: impl Into<crate::cards::CardId>,
    ) -> GameResult<()> {
        let card_id = card_id.into();
        self.ensure_round_live()?;
        self.ensure_phase(Phase::Summon)?;
        self.ensure_active(player)?;
        if self.state.chain.is_some() {
            return Err(GameError::ChainOpen);
        }
        let card = self.state.require_creature(&card_id)?;
        let hand_index = self.state.players[player]
            .hand_index(&card_id)
            .ok_or_else(|| GameError::CardNotInHand(card_id.clone()))?;
        let slot = self.state.players[player]
            .first_empty_slot()
            .ok_or(GameError::FieldFull)?;
        if !self.state.players[player]
            .energy
            .pay(card.affinity, card.cost)
        {
            return Err(GameError::InsufficientEnergy {
                affinity: card.affinity,
                cost: card.cost,
            });
        }
        self.state.players[player].hand.remove(hand_index);
        let instance = self.state.alloc_instance();
        let name = card.name.clone();
        self.state.players[player].field[slot] =
            Some(CreatureInPlay::summon(instance, card.clone()));
        self.state
            .push_log(format!("{player} summons {name} to slot {}", slot + 1));
        self.state
            .enqueue_triggers(TriggerEvent::OnSummon, player, Some(&card.id));
        EffectResolver::drain_queue(&mut self.state)?;
        self.finish_action(player);
        Ok(())
    }

    // === Shared validation ===

    pub(crate) fn ensure_round_live(&self) -> GameResult<()> {
        if self.state.round_result.is_some() {
            return Err(GameError::RoundFinished);
        }
        Ok(())
    }

    pub(crate) fn ensure_phase(&self, expected: Phase) -> GameResult<()> {
        if self.state.phase != expected {
            return Err(GameError::WrongPhase {
                expected,
                actual: self.state.phase,
            });
        }
        Ok(())
    }

    pub(crate) fn ensure_active(&self, player: PlayerId) -> GameResult<()> {
        if self.state.active_player != player {
            return Err(GameError::NotYourTurn(player));
        }
        Ok(())
    }

    /// The acting player yields priority to the opponent.
    pub(crate) fn finish_action(&mut self, player: PlayerId) {
        self.state.active_player = player.opponent();
        self.state.consecutive_passes = 0;
    }
}

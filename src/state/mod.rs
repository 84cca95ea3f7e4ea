//! The full mutable game snapshot and its core mutations.
//!
//! `GameState` owns everything a round touches: both players, the
//! shared phase, the chain, the trigger queue, the RNG, and the
//! append-only log. One engine instance owns exactly one state; the
//! card library is immutable and shared read-only.

pub mod chain;
pub mod phase;
pub mod player_state;

use std::collections::VecDeque;
use std::sync::Arc;

use crate::cards::{CardDefinition, CardId, CardKind, CardLibrary, CreatureCard, DeckList, TacticCard};
use crate::core::{Affinity, GameError, GameResult, GameRng, PlayerId, PlayerPair, Seed};
use crate::triggers::{Trigger, TriggerContext, TriggerEvent, TriggerId};

pub use chain::{ChainPlay, ChainState, CHAIN_LIMIT};
pub use phase::Phase;
pub use player_state::{
    CreatureInPlay, InstanceId, PlayerState, TemporaryEffect, FIELD_SLOTS,
};

/// How a round ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub winner: Option<PlayerId>,
    pub reason: String,
}

/// The complete game snapshot.
#[derive(Clone, Debug)]
pub struct GameState {
    pub phase: Phase,
    pub first_player: PlayerId,
    pub active_player: PlayerId,
    pub players: PlayerPair<PlayerState>,
    /// Shared read-only card catalogue.
    pub library: Arc<CardLibrary>,
    pub decklists: PlayerPair<DeckList>,
    /// Round number, starting at 1.
    pub round: u32,
    /// Monotonically non-decreasing; the match ends at 2 wins.
    pub match_score: PlayerPair<u32>,
    pub chain: Option<ChainState>,
    pub consecutive_passes: u32,
    /// Pending reactive effects, drained FIFO.
    pub trigger_queue: VecDeque<Trigger>,
    pub rng: GameRng,
    /// Append-only human-readable round log.
    pub log: Vec<String>,
    /// Set exactly once per round; cleared by starting the next round.
    pub round_result: Option<RoundResult>,
    next_instance: u32,
    next_trigger: u32,
}

impl GameState {
    /// A fresh state with empty players. The engine populates players
    /// through its round lifecycle.
    #[must_use]
    pub fn new(
        library: Arc<CardLibrary>,
        decklists: PlayerPair<DeckList>,
        first_player: PlayerId,
        seed: &Seed,
    ) -> Self {
        Self {
            phase: Phase::Start,
            first_player,
            active_player: first_player,
            players: PlayerPair::from_fn(|id| PlayerState::new(id, Vec::new())),
            library,
            decklists,
            round: 1,
            match_score: PlayerPair::new(0, 0),
            chain: None,
            consecutive_passes: 0,
            trigger_queue: VecDeque::new(),
            rng: GameRng::new(seed),
            log: Vec::new(),
            round_result: None,
            next_instance: 1,
            next_trigger: 1,
        }
    }

    /// Borrow one player's state.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id]
    }

    /// Borrow one player's state mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id]
    }

    /// Append a line to the round log.
    pub fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }

    /// Allocate a creature instance id.
    pub(crate) fn alloc_instance(&mut self) -> InstanceId {
        let id = InstanceId(self.next_instance);
        self.next_instance += 1;
        id
    }

    /// Allocate a trigger id.
    pub(crate) fn alloc_trigger_id(&mut self) -> TriggerId {
        let id = TriggerId(self.next_trigger);
        self.next_trigger += 1;
        id
    }

    // === Card lookups ===

    /// Look up a definition, failing on unknown ids.
    pub fn card(&self, id: &CardId) -> GameResult<&CardDefinition> {
        self.library
            .get(id)
            .ok_or_else(|| GameError::UnknownCard(id.clone()))
    }

    /// Look up a creature definition, cloned out of the library.
    pub fn require_creature(&self, id: &CardId) -> GameResult<CreatureCard> {
        match self.card(id)? {
            CardDefinition::Creature(c) => Ok(c.clone()),
            CardDefinition::Tactic(_) => Err(GameError::WrongCardType {
                card: id.clone(),
                expected: CardKind::Creature,
            }),
        }
    }

    /// Look up a tactic definition, cloned out of the library.
    pub fn require_tactic(&self, id: &CardId) -> GameResult<TacticCard> {
        match self.card(id)? {
            CardDefinition::Tactic(t) => Ok(t.clone()),
            CardDefinition::Creature(_) => Err(GameError::WrongCardType {
                card: id.clone(),
                expected: CardKind::Tactic,
            }),
        }
    }

    // === Round result ===

    /// Record the round winner. Idempotent: only the first call records
    /// a result and bumps the match score.
    pub fn set_round_winner(&mut self, winner: PlayerId, reason: &str) {
        if self.round_result.is_some() {
            return;
        }
        self.round_result = Some(RoundResult {
            winner: Some(winner),
            reason: reason.to_string(),
        });
        self.match_score[winner] += 1;
        log::debug!("round {} won by {winner}: {reason}", self.round);
    }

    /// Whether either player has reached the match-winning score.
    #[must_use]
    pub fn match_decided(&self) -> bool {
        self.match_score[PlayerId::A] >= 2 || self.match_score[PlayerId::B] >= 2
    }

    // === Draws ===

    /// Draw `count` cards for a player.
    ///
    /// Non-wildcard draws feed the drawer's energy pool. If the deck
    /// holds fewer cards than requested, the player immediately loses
    /// the round and nothing is drawn. Raised `OnDrawCard` events are
    /// enqueued, not drained; the calling operation drains the queue.
    pub fn draw_cards(&mut self, player: PlayerId, count: usize) {
        if self.players[player].deck.len() < count {
            self.set_round_winner(player.opponent(), "Deck exhaustion");
            return;
        }
        let library = Arc::clone(&self.library);
        for _ in 0..count {
            let Some(card_id) = self.players[player].deck.pop_front() else {
                break;
            };
            self.players[player].hand.push(card_id.clone());
            if let Some(card) = library.get(&card_id) {
                if card.affinity() != Affinity::Neutral {
                    self.players[player].energy.add(card.affinity(), 1);
                }
                self.push_log(format!("{player} draws {}", card.name()));
            }
            self.enqueue_triggers(TriggerEvent::OnDrawCard, player, Some(&card_id));
        }
    }

    // === Trigger queue ===

    /// Enqueue every registered trigger matching `event` whose
    /// condition accepts its context. Both players' triggers are
    /// considered, the acting player's first.
    pub fn enqueue_triggers(
        &mut self,
        event: TriggerEvent,
        acting: PlayerId,
        card_id: Option<&CardId>,
    ) {
        let mut fired = Vec::new();
        for owner in [acting, acting.opponent()] {
            let player = &self.players[owner];
            let opponent = &self.players[owner.opponent()];
            for trigger in &player.triggers {
                if trigger.event != event {
                    continue;
                }
                let ctx = TriggerContext {
                    player,
                    opponent,
                    card_id,
                };
                let accepted = trigger
                    .condition
                    .as_ref()
                    .map_or(true, |c| c.evaluate(&ctx));
                if accepted {
                    fired.push(trigger.clone());
                }
            }
        }
        if !fired.is_empty() {
            log::trace!("{event}: {} trigger(s) enqueued", fired.len());
            self.trigger_queue.extend(fired);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DeckEntry;

    fn empty_state() -> GameState {
        let library = Arc::new(CardLibrary::load_starter().unwrap());
        let deck = DeckList {
            id: "d".into(),
            name: "D".into(),
            size: 2,
            cards: vec![DeckEntry { id: "goblin".into(), count: 2 }],
        };
        GameState::new(
            library,
            PlayerPair::new(deck.clone(), deck),
            PlayerId::A,
            &Seed::Int(1),
        )
    }

    #[test]
    fn test_round_winner_idempotent() {
        let mut state = empty_state();
        state.set_round_winner(PlayerId::B, "Battle resolved");
        state.set_round_winner(PlayerId::A, "should be ignored");

        let result = state.round_result.as_ref().unwrap();
        assert_eq!(result.winner, Some(PlayerId::B));
        assert_eq!(result.reason, "Battle resolved");
        assert_eq!(state.match_score[PlayerId::B], 1);
        assert_eq!(state.match_score[PlayerId::A], 0);
    }

    #[test]
    fn test_draw_gains_energy() {
        let mut state = empty_state();
        state.players[PlayerId::A] =
            PlayerState::new(PlayerId::A, vec!["goblin".into(), "goblin".into()]);

        state.draw_cards(PlayerId::A, 2);

        let player = state.player(PlayerId::A);
        assert_eq!(player.hand.len(), 2);
        assert_eq!(player.energy.get(Affinity::Fire), 2);
        assert!(state.round_result.is_none());
    }

    #[test]
    fn test_draw_exhaustion_loses_round_without_partial_draw() {
        let mut state = empty_state();
        state.players[PlayerId::A] = PlayerState::new(PlayerId::A, vec!["goblin".into()]);

        state.draw_cards(PlayerId::A, 2);

        let player = state.player(PlayerId::A);
        assert!(player.hand.is_empty());
        assert_eq!(player.deck.len(), 1);
        let result = state.round_result.as_ref().unwrap();
        assert_eq!(result.winner, Some(PlayerId::B));
        assert_eq!(result.reason, "Deck exhaustion");
    }

    #[test]
    fn test_require_wrong_type() {
        let state = empty_state();
        assert!(matches!(
            state.require_tactic(&"goblin".into()),
            Err(GameError::WrongCardType { .. })
        ));
        assert!(state.require_creature(&"goblin".into()).is_ok());
        assert!(matches!(
            state.require_creature(&"nonexistent".into()),
            Err(GameError::UnknownCard(_))
        ));
    }
}

//! Round lifecycle: phase progression, passing, and round/match flow.

use crate::cards::{CardId, DeckList};
use crate::core::{GameError, GameResult, PlayerId};
use crate::effects::EffectResolver;
use crate::state::{Phase, PlayerState};
use crate::triggers::TriggerEvent;

use super::GameEngine;

/// Cards each player draws in the Draw phase.
pub(crate) const DRAW_COUNT: usize = 6;

impl GameEngine {
    /// Start the current round number from a clean slate.
    ///
    /// Rebuilds both players from their deck lists, runs the automatic
    /// Start and Draw phases, then hands priority to the first player
    /// in Prepare. Deck exhaustion during the draw records the round
    /// result but the round still settles in Prepare.
    pub(crate) fn start_round(&mut self) -> GameResult<()> {
        self.state.chain = None;
        self.state.consecutive_passes = 0;
        self.state.round_result = None;
        self.reset_players()?;
        self.state.phase = Phase::Start;
        let round = self.state.round;
        self.state.push_log(format!("Round {round} start"));
        log::debug!("round {round} starting");
        self.run_start_phase()?;
        self.run_draw_phase()?;
        self.state.phase = Phase::Prepare;
        self.state.active_player = self.state.first_player;
        self.state.push_log("Enter Prepare phase");
        Ok(())
    }

    /// Begin the next round of the match.
    pub fn start_next_round(&mut self) -> GameResult<()> {
        if self.state.round_result.is_none() {
            return Err(GameError::RoundUnfinished);
        }
        if self.state.match_decided() {
            return Err(GameError::MatchDecided);
        }
        self.state.round += 1;
        self.start_round()
    }

    fn reset_players(&mut self) -> GameResult<()> {
        for player in PlayerId::both() {
            let deck_list = self.state.decklists[player].clone();
            let built = self.build_player(player, &deck_list)?;
            self.state.players[player] = built;
        }
        Ok(())
    }

    /// Build one player, shuffling the expanded deck unless a preset
    /// order was given. Every referenced card must exist.
    fn build_player(&mut self, id: PlayerId, deck: &DeckList) -> GameResult<PlayerState> {
        let order: Vec<CardId> = match &self.deck_orders[id] {
            Some(preset) => preset.clone(),
            None => {
                let mut expanded = deck.expand();
                self.state.rng.shuffle(&mut expanded);
                expanded
            }
        };
        for card_id in &order {
            if !self.state.library.contains(card_id) {
                return Err(GameError::UnknownDeckCard(card_id.clone()));
            }
        }
        Ok(PlayerState::new(id, order))
    }

    fn run_start_phase(&mut self) -> GameResult<()> {
        self.state.chain = None;
        self.state.trigger_queue.clear();
        for player in PlayerId::both() {
            self.state.players[player].temp_effects.clear();
        }
        // One enqueue collects both players' triggers.
        self.state
            .enqueue_triggers(TriggerEvent::OnStartPhase, PlayerId::A, None);
        EffectResolver::drain_queue(&mut self.state)
    }

    fn run_draw_phase(&mut self) -> GameResult<()> {
        self.state.phase = Phase::Draw;
        self.state.draw_cards(PlayerId::A, DRAW_COUNT);
        self.state.draw_cards(PlayerId::B, DRAW_COUNT);
        EffectResolver::drain_queue(&mut self.state)
    }

    /// Decline to act.
    ///
    /// With an open chain this resolves it short. Otherwise two
    /// consecutive passes advance the phase. Once the round holds a
    /// result, passing is accepted and ignored.
    pub fn pass(&mut self, player: PlayerId) -> GameResult<()> {
        if self.state.round_result.is_some() {
            return Ok(());
        }
        self.ensure_active(player)?;
        if self.state.chain.is_some() {
            self.state.push_log(format!("{player} passes on the chain"));
            self.resolve_chain()?;
            self.finish_action(player);
            return Ok(());
        }
        self.state.consecutive_passes += 1;
        self.state.push_log(format!("{player} passes"));
        self.state.active_player = player.opponent();
        if self.state.consecutive_passes >= 2 {
            self.advance_phase()?;
        }
        Ok(())
    }

    /// Move to the next phase, running automatic phases through.
    pub(crate) fn advance_phase(&mut self) -> GameResult<()> {
        let Some(next) = self.state.phase.next() else {
            return Ok(());
        };
        self.state.consecutive_passes = 0;
        self.state.active_player = self.state.first_player;
        self.state.push_log(format!("Advance to {next} phase"));
        self.state.phase = next;
        match next {
            Phase::Battle => {
                self.run_battle()?;
                self.advance_phase()?;
            }
            Phase::End => self.run_end_phase()?,
            _ => {}
        }
        Ok(())
    }

    /// End-phase cleanup: revert round-scoped stat deltas, settle any
    /// queued triggers, then fire `OnEndPhase` once and settle again.
    fn run_end_phase(&mut self) -> GameResult<()> {
        for player in PlayerId::both() {
            self.clear_temporary_effects(player);
        }
        EffectResolver::drain_queue(&mut self.state)?;
        self.state.push_log("End phase cleanup");
        if let Some(result) = &self.state.round_result {
            if let Some(winner) = result.winner {
                if self.state.match_score[winner] >= 2 {
                    self.state.push_log(format!("Match winner: {winner}"));
                }
            }
        }
        self.state
            .enqueue_triggers(TriggerEvent::OnEndPhase, PlayerId::A, None);
        EffectResolver::drain_queue(&mut self.state)
    }

    /// Subtract each recorded delta from the creature that still
    /// carries it, then drop the records. Deltas for creatures no
    /// longer on the field vanish with them.
    fn clear_temporary_effects(&mut self, player: PlayerId) {
        let temp = std::mem::take(&mut self.state.players[player].temp_effects);
        for effect in &temp {
            for slot in self.state.players[player].field.iter_mut() {
                if let Some(creature) = slot {
                    if creature.instance == effect.instance {
                        creature.current_atk -= effect.atk_delta;
                        creature.current_hp -= effect.hp_delta;
                    }
                }
            }
        }
    }
}

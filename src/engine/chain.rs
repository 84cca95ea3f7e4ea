//! Tactic plays and chain resolution.

use crate::cards::{CardId, TacticCard};
use crate::core::{GameError, GameResult, PlayerId};
use crate::effects::{EffectOverride, EffectResolver};
use crate::state::{ChainPlay, ChainState, CHAIN_LIMIT};
use crate::triggers::TriggerEvent;

use super::GameEngine;

impl GameEngine {
    /// Play a tactic from hand, opening or extending the chain.
    ///
    /// `overrides` patches the card's effects positionally for this
    /// play only; `None` entries keep the declared effect.
    ///
    /// The card leaves the hand before the chain position is checked,
    /// so a play rejected for chain reasons has still consumed the
    /// card. Callers that need the stricter behavior validate the chain
    /// position themselves first.
    pub fn play_tactic(
        &mut self,
        player: PlayerId,
        card_id: impl Into<CardId>,
        overrides: &[Option<EffectOverride>],
    ) -> GameResult<()> {
        let card_id = card_id.into();
        self.ensure_round_live()?;
        let base = self.state.require_tactic(&card_id)?;
        let card = apply_overrides(base, overrides);
        if !card.timing.contains(&self.state.phase) {
            return Err(GameError::TimingNotAllowed {
                card: card_id,
                phase: self.state.phase,
            });
        }
        self.ensure_active(player)?;
        let hand_index = self.state.players[player]
            .hand_index(&card_id)
            .ok_or_else(|| GameError::CardNotInHand(card_id.clone()))?;
        self.state.players[player].hand.remove(hand_index);

        if self.state.chain.is_none() {
            let name = card.name.clone();
            let id = card.id.clone();
            self.state.chain = Some(ChainState::open(player, card));
            self.state.active_player = player.opponent();
            self.state
                .push_log(format!("{player} opens a chain with {name}"));
            self.state
                .enqueue_triggers(TriggerEvent::OnTacticPlayed, player, Some(&id));
            return Ok(());
        }

        let mut chain = match self.state.chain.take() {
            Some(chain) => chain,
            None => return Err(GameError::NotExpectedResponder(player)),
        };
        let outcome = Self::check_response(&chain, player, &card_id, card.chainable);
        if let Err(err) = outcome {
            self.state.chain = Some(chain);
            return Err(err);
        }

        let name = card.name.clone();
        let id = card.id.clone();
        chain.plays.push(ChainPlay { player, card });
        let full = chain.plays.len() >= CHAIN_LIMIT;
        chain.expected_responder = if chain.plays.len() == 2 {
            Some(chain.starter)
        } else {
            None
        };
        if let Some(responder) = chain.expected_responder {
            self.state.active_player = responder;
        }
        self.state.chain = Some(chain);
        self.state.push_log(format!("{player} chains {name}"));
        self.state
            .enqueue_triggers(TriggerEvent::OnTacticPlayed, player, Some(&id));
        if full {
            self.resolve_chain()?;
            self.finish_action(player);
        }
        Ok(())
    }

    fn check_response(
        chain: &ChainState,
        player: PlayerId,
        card_id: &CardId,
        chainable: bool,
    ) -> GameResult<()> {
        if chain.expected_responder != Some(player) {
            return Err(GameError::NotExpectedResponder(player));
        }
        if chain.is_full() {
            return Err(GameError::ChainFull);
        }
        // Every response position requires a chainable tactic.
        if !chainable {
            return Err(GameError::NotChainable(card_id.clone()));
        }
        Ok(())
    }

    /// Resolve the open chain, last play first.
    ///
    /// Each play's effects apply with that play's owner acting. Once
    /// resolved, priority sits with the starter's opponent and any
    /// raised triggers settle. A play that fails to resolve returns
    /// its error with the chain still in place; mutations from plays
    /// already resolved stand.
    pub(crate) fn resolve_chain(&mut self) -> GameResult<()> {
        let Some(chain) = self.state.chain.take() else {
            return Ok(());
        };
        log::debug!(
            "resolving chain of {} play(s) started by {}",
            chain.plays.len(),
            chain.starter
        );
        let mut failed = None;
        'plays: for play in chain.plays.iter().rev() {
            for effect in &play.card.effects {
                if let Err(err) = EffectResolver::apply(&mut self.state, effect, play.player) {
                    failed = Some(err);
                    break 'plays;
                }
            }
            self.state
                .push_log(format!("{} resolves {}", play.player, play.card.name));
        }
        if let Some(err) = failed {
            self.state.chain = Some(chain);
            return Err(err);
        }
        self.state.active_player = chain.starter.opponent();
        self.state.consecutive_passes = 0;
        EffectResolver::drain_queue(&mut self.state)
    }
}

/// Patch a tactic's effects positionally for one play.
fn apply_overrides(mut card: TacticCard, overrides: &[Option<EffectOverride>]) -> TacticCard {
    if overrides.is_empty() {
        return card;
    }
    card.effects = card
        .effects
        .iter()
        .enumerate()
        .map(|(idx, effect)| match overrides.get(idx) {
            Some(Some(over)) => effect.with_override(over),
            _ => effect.clone(),
        })
        .collect();
    card
}

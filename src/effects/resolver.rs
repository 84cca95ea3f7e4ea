//! The effect interpreter.
//!
//! Turns declarative `EffectDefinition`s into state mutations. The
//! resolver is stateless; everything it needs lives on the `GameState`
//! it mutates, including the RNG used for random target selection.

use std::sync::Arc;

use crate::cards::CardKind;
use crate::core::{Affinity, GameError, GameResult, PlayerId};
use crate::state::{CreatureInPlay, GameState, InstanceId, TemporaryEffect};
use crate::triggers::TriggerDuration;

use super::effect::{EffectDefinition, EffectDuration, EffectKind, SummonParams};
use super::target::{TargetSelector, Zone};

/// A concrete target produced by selection.
///
/// Player-level targets carry no instance; field targets carry the
/// creature's instance and slot at selection time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetRef {
    pub player: PlayerId,
    pub instance: Option<InstanceId>,
    pub slot: Option<usize>,
}

impl TargetRef {
    fn player_level(player: PlayerId) -> Self {
        Self {
            player,
            instance: None,
            slot: None,
        }
    }
}

/// Applies effects and drains the trigger queue.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve a selector into an ordered target list.
    ///
    /// Without a zone the selector yields one player-level reference
    /// per scoped player. A `Field` zone enumerates occupied slots in
    /// slot order, filtered; `Hand` and `Deck` stay player-level. Other
    /// zones yield nothing. `random` shuffles with the engine RNG
    /// before `count` truncates.
    pub fn select_targets(
        state: &mut GameState,
        selector: &TargetSelector,
        actor: PlayerId,
    ) -> Vec<TargetRef> {
        let mut targets = Vec::new();
        for pid in selector.owner.players(actor) {
            match selector.zone {
                None | Some(Zone::Hand) | Some(Zone::Deck) => {
                    targets.push(TargetRef::player_level(pid));
                }
                Some(Zone::Field) => {
                    for (idx, slot) in state.player(pid).field.iter().enumerate() {
                        let Some(creature) = slot else { continue };
                        if selector
                            .card_type
                            .is_some_and(|kind| kind != CardKind::Creature)
                        {
                            continue;
                        }
                        if selector
                            .id
                            .as_ref()
                            .is_some_and(|id| *id != creature.card.id)
                        {
                            continue;
                        }
                        if selector
                            .affinity
                            .is_some_and(|f| !f.matches(creature.card.affinity))
                        {
                            continue;
                        }
                        if selector
                            .position
                            .as_ref()
                            .is_some_and(|allowed| !allowed.contains(&(idx + 1)))
                        {
                            continue;
                        }
                        targets.push(TargetRef {
                            player: pid,
                            instance: Some(creature.instance),
                            slot: Some(idx),
                        });
                    }
                }
                Some(Zone::Trash) | Some(Zone::Energy) => {}
            }
        }
        if selector.random {
            state.rng.shuffle(&mut targets);
        }
        if let Some(count) = selector.count {
            targets.truncate(count);
        }
        targets
    }

    /// Apply one effect with `actor` acting.
    pub fn apply(
        state: &mut GameState,
        effect: &EffectDefinition,
        actor: PlayerId,
    ) -> GameResult<()> {
        let targets = Self::select_targets(state, &effect.target, actor);
        match &effect.kind {
            EffectKind::ModifyStats {
                atk_delta,
                hp_delta,
            } => {
                Self::modify_stats(state, &targets, actor, *atk_delta, *hp_delta, effect.duration);
            }
            EffectKind::DrawCards { count } => {
                for t in &targets {
                    state.draw_cards(t.player, *count as usize);
                }
            }
            EffectKind::DiscardFromHand { count, random } => {
                for t in &targets {
                    Self::discard_from_hand(state, t.player, *count as usize, *random);
                }
            }
            EffectKind::DiscardSpecificFromHand { card_id, count } => {
                for t in &targets {
                    Self::discard_specific(state, t.player, card_id.as_ref(), *count as usize);
                }
            }
            EffectKind::SummonSpecific(params)
            | EffectKind::SummonSpecificFromHand(params)
            | EffectKind::SummonSpecificFromDeck(params) => {
                for t in &targets {
                    Self::summon_by_effect(state, t.player, params)?;
                }
            }
            EffectKind::TutorFromDeck { card_id, count } => {
                for t in &targets {
                    Self::tutor_from_deck(state, t.player, card_id.as_ref(), *count as usize)?;
                }
            }
        }
        Ok(())
    }

    fn modify_stats(
        state: &mut GameState,
        targets: &[TargetRef],
        actor: PlayerId,
        atk_delta: i32,
        hp_delta: i32,
        duration: EffectDuration,
    ) {
        for t in targets {
            let Some(slot) = t.slot else { continue };
            let Some(creature) = state.players[t.player].field[slot].as_mut() else {
                continue;
            };
            creature.current_atk += atk_delta;
            creature.current_hp += hp_delta;
            let instance = creature.instance;
            let name = creature.card.name.clone();
            if duration == EffectDuration::UntilEndOfRound {
                state.players[t.player].temp_effects.push(TemporaryEffect {
                    instance,
                    atk_delta,
                    hp_delta,
                });
            }
            state.push_log(format!(
                "{actor} buffs {name} ATK {atk_delta:+} HP {hp_delta:+}"
            ));
        }
    }

    fn discard_from_hand(state: &mut GameState, player: PlayerId, count: usize, random: bool) {
        if random {
            let mut pool = state.players[player].hand.clone();
            state.rng.shuffle(&mut pool);
            for card_id in pool.into_iter().take(count) {
                let hand = &mut state.players[player].hand;
                if let Some(idx) = hand.iter().position(|id| *id == card_id) {
                    hand.remove(idx);
                    state.players[player].trash.push(card_id.clone());
                    state.push_log(format!("{player} discards {card_id}"));
                }
            }
        } else {
            for _ in 0..count {
                if state.players[player].hand.is_empty() {
                    break;
                }
                let card_id = state.players[player].hand.remove(0);
                state.players[player].trash.push(card_id.clone());
                state.push_log(format!("{player} discards {card_id}"));
            }
        }
    }

    /// Discard a named card (or the current first hand card) up to
    /// `count` times, stopping silently once it is absent.
    fn discard_specific(
        state: &mut GameState,
        player: PlayerId,
        card_id: Option<&crate::cards::CardId>,
        count: usize,
    ) {
        for _ in 0..count {
            let Some(target_id) = card_id
                .cloned()
                .or_else(|| state.players[player].hand.first().cloned())
            else {
                break;
            };
            let Some(idx) = state.players[player].hand_index(&target_id) else {
                break;
            };
            state.players[player].hand.remove(idx);
            state.players[player].trash.push(target_id.clone());
            state.push_log(format!("{player} discards {target_id}"));
        }
    }

    /// Place copies of a creature into the leftmost empty slots.
    ///
    /// Each copy pays its cost unless waived; placement stops at the
    /// first unpayable copy or when the field fills. Effect summons do
    /// not raise `OnSummon`.
    fn summon_by_effect(
        state: &mut GameState,
        player: PlayerId,
        params: &SummonParams,
    ) -> GameResult<()> {
        let creature = state.require_creature(&params.card_id)?;
        let mut remaining = params.count;
        for slot in 0..crate::state::FIELD_SLOTS {
            if remaining == 0 {
                break;
            }
            if state.players[player].field[slot].is_some() {
                continue;
            }
            if !params.ignore_cost
                && !state.players[player]
                    .energy
                    .pay(creature.affinity, creature.cost)
            {
                break;
            }
            let instance = state.alloc_instance();
            state.players[player].field[slot] =
                Some(CreatureInPlay::summon(instance, creature.clone()));
            remaining -= 1;
            state.push_log(format!(
                "{player} summons {} by effect to slot {}",
                creature.name,
                slot + 1
            ));
        }
        Ok(())
    }

    /// Move a named (or topmost) deck card to hand with the usual
    /// affinity energy gain.
    fn tutor_from_deck(
        state: &mut GameState,
        player: PlayerId,
        card_id: Option<&crate::cards::CardId>,
        count: usize,
    ) -> GameResult<()> {
        let library = Arc::clone(&state.library);
        for _ in 0..count {
            let Some(target_id) = card_id
                .cloned()
                .or_else(|| state.players[player].deck.front().cloned())
            else {
                break;
            };
            let Some(idx) = state.players[player]
                .deck
                .iter()
                .position(|id| *id == target_id)
            else {
                return Err(GameError::CardNotInDeck(target_id));
            };
            state.players[player].deck.remove(idx);
            state.players[player].hand.push(target_id.clone());
            if let Some(card) = library.get(&target_id) {
                if card.affinity() != Affinity::Neutral {
                    state.players[player].energy.add(card.affinity(), 1);
                }
                state.push_log(format!("{player} adds {} to hand", card.name()));
            }
        }
        Ok(())
    }

    /// Drain the trigger queue to exhaustion, FIFO.
    ///
    /// Each trigger's effects apply with its owner acting; applying
    /// them may enqueue further triggers, which drain in the same pass.
    /// One-shot triggers are unregistered from their owner afterwards.
    pub fn drain_queue(state: &mut GameState) -> GameResult<()> {
        while let Some(trigger) = state.trigger_queue.pop_front() {
            for effect in &trigger.effects {
                Self::apply(state, effect, trigger.owner)?;
            }
            if trigger.duration == TriggerDuration::OneShot {
                state.players[trigger.owner]
                    .triggers
                    .retain(|t| t.id != trigger.id);
            }
        }
        Ok(())
    }
}

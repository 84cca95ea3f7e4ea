//! Per-player mutable state.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CreatureCard};
use crate::core::{EnergyPool, PlayerId};
use crate::triggers::Trigger;

/// Number of field slots. Fixed for the game's lifetime.
pub const FIELD_SLOTS: usize = 6;

/// Stable identity of a creature instance, independent of its slot.
///
/// Allocated from an engine counter; never reused within one engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "creature_{}", self.0)
    }
}

/// A creature on the field.
///
/// `current_atk`/`current_hp` drift from the definition's base values
/// through buffs and damage; never read stats from the definition once
/// the creature is in play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatureInPlay {
    pub instance: InstanceId,
    pub card: CreatureCard,
    pub current_atk: i32,
    pub current_hp: i32,
}

impl CreatureInPlay {
    /// A fresh instance at the definition's base stats.
    #[must_use]
    pub fn summon(instance: InstanceId, card: CreatureCard) -> Self {
        let current_atk = card.atk;
        let current_hp = card.hp;
        Self {
            instance,
            card,
            current_atk,
            current_hp,
        }
    }
}

/// A stat delta to revert at End-phase cleanup.
///
/// Expiry is always end-of-round; reverted and discarded atomically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporaryEffect {
    pub instance: InstanceId,
    pub atk_delta: i32,
    pub hp_delta: i32,
}

/// Everything one player owns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    /// Draw pile; front is the next draw.
    pub deck: VecDeque<CardId>,
    /// Ordered by draw order.
    pub hand: Vec<CardId>,
    /// Ordered by discard order.
    pub trash: Vec<CardId>,
    /// Fixed-length slots, each at most one creature.
    pub field: [Option<CreatureInPlay>; FIELD_SLOTS],
    pub energy: EnergyPool,
    pub temp_effects: Vec<TemporaryEffect>,
    pub triggers: Vec<Trigger>,
}

impl PlayerState {
    /// An empty player with the given deck order.
    #[must_use]
    pub fn new(id: PlayerId, deck: Vec<CardId>) -> Self {
        Self {
            id,
            deck: deck.into(),
            hand: Vec::new(),
            trash: Vec::new(),
            field: Default::default(),
            energy: EnergyPool::new(),
            temp_effects: Vec::new(),
            triggers: Vec::new(),
        }
    }

    /// Number of occupied field slots.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.field.iter().filter(|slot| slot.is_some()).count()
    }

    /// Leftmost empty slot, if any.
    #[must_use]
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.field.iter().position(|slot| slot.is_none())
    }

    /// Position of a card in hand.
    #[must_use]
    pub fn hand_index(&self, card_id: &CardId) -> Option<usize> {
        self.hand.iter().position(|id| id == card_id)
    }

    /// Sum of current attack across the field.
    #[must_use]
    pub fn total_atk(&self) -> i32 {
        self.field
            .iter()
            .flatten()
            .map(|c| c.current_atk)
            .sum()
    }

    /// Sum of current hit points across the field.
    #[must_use]
    pub fn total_hp(&self) -> i32 {
        self.field.iter().flatten().map(|c| c.current_hp).sum()
    }
}

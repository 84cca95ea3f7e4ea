//! Declarative effect descriptions.
//!
//! Effects are data resolved by the interpreter: a closed tagged union
//! of kinds with variant-specific parameters, a target selector, and an
//! optional duration. An unrecognized kind in card data fails at load
//! time with a descriptive error; nothing is silently ignored.

use serde::{Deserialize, Serialize};

use super::target::TargetSelector;
use crate::cards::CardId;

fn one() -> u32 {
    1
}

/// How long an effect's mutation lasts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectDuration {
    /// Permanent for the round.
    #[default]
    Instant,
    /// Reverted atomically at End-phase cleanup.
    UntilEndOfRound,
}

/// Parameters shared by the three summon-by-effect kinds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonParams {
    /// Creature to place.
    pub card_id: CardId,
    /// Copies to place into the leftmost empty slots.
    #[serde(default = "one")]
    pub count: u32,
    /// Skip paying the creature's cost.
    #[serde(default)]
    pub ignore_cost: bool,
}

/// An effect kind with its parameters.
///
/// Serialized adjacently tagged as `{"kind": ..., "params": {...}}` to
/// match the card catalogue schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "params")]
pub enum EffectKind {
    /// Add atk/hp deltas to each targeted creature's current stats.
    #[serde(rename_all = "camelCase")]
    ModifyStats {
        #[serde(default)]
        atk_delta: i32,
        #[serde(default)]
        hp_delta: i32,
    },

    /// Draw cards for each targeted player, with the same exhaustion
    /// and energy rules as the Draw phase.
    DrawCards {
        #[serde(default = "one")]
        count: u32,
    },

    /// Discard from the front of the hand, or randomly when flagged.
    DiscardFromHand {
        #[serde(default = "one")]
        count: u32,
        #[serde(default)]
        random: bool,
    },

    /// Discard a named card (or the first hand card) up to `count`
    /// times; stops silently when the card is not found.
    #[serde(rename_all = "camelCase")]
    DiscardSpecificFromHand {
        #[serde(default)]
        card_id: Option<CardId>,
        #[serde(default = "one")]
        count: u32,
    },

    /// Place copies of a named creature into empty slots.
    SummonSpecific(SummonParams),
    /// Same state mutation as `SummonSpecific`; the distinct kind only
    /// records where the authoring data claims the copy comes from.
    SummonSpecificFromHand(SummonParams),
    /// Same state mutation as `SummonSpecific`.
    SummonSpecificFromDeck(SummonParams),

    /// Move a named (or topmost) deck card to hand, granting its
    /// affinity energy like a draw. Errors when a named card is absent.
    #[serde(rename_all = "camelCase")]
    TutorFromDeck {
        #[serde(default)]
        card_id: Option<CardId>,
        #[serde(default = "one")]
        count: u32,
    },
}

/// A complete effect description: kind + parameters, selector, duration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectDefinition {
    #[serde(flatten)]
    pub kind: EffectKind,
    pub target: TargetSelector,
    #[serde(default)]
    pub duration: EffectDuration,
}

impl EffectDefinition {
    /// Create an instant effect.
    #[must_use]
    pub fn new(kind: EffectKind, target: TargetSelector) -> Self {
        Self {
            kind,
            target,
            duration: EffectDuration::Instant,
        }
    }

    /// Set the duration (builder pattern).
    #[must_use]
    pub fn lasting(mut self, duration: EffectDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Apply a per-play override, replacing whichever parts it names.
    #[must_use]
    pub fn with_override(&self, over: &EffectOverride) -> Self {
        Self {
            kind: over.kind.clone().unwrap_or_else(|| self.kind.clone()),
            target: over.target.clone().unwrap_or_else(|| self.target.clone()),
            duration: over.duration.unwrap_or(self.duration),
        }
    }
}

/// Per-play override for one effect of a tactic.
///
/// A chain play may retarget or reparameterize its tactic's declared
/// effects (e.g. naming the specific cards to hit) without touching the
/// card definition. Unset parts keep the declared values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EffectKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetSelector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
}

impl EffectOverride {
    /// Override only the target selector.
    #[must_use]
    pub fn retarget(target: TargetSelector) -> Self {
        Self {
            target: Some(target),
            ..Self::default()
        }
    }

    /// Override only the kind/parameters.
    #[must_use]
    pub fn reparameterize(kind: EffectKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }
}

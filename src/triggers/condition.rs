//! Trigger predicates.
//!
//! Conditions are data, not closures, so triggers stay cloneable,
//! serializable, and auditable. A condition is evaluated against a
//! context built for the trigger's owner at enqueue time.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::Affinity;
use crate::state::PlayerState;

/// Context a condition is evaluated against.
///
/// `player` is always the trigger's owner; `card_id` is the card the
/// triggering event concerned, when it concerned one.
pub struct TriggerContext<'a> {
    pub player: &'a PlayerState,
    pub opponent: &'a PlayerState,
    pub card_id: Option<&'a CardId>,
}

/// Optional predicate gating a trigger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TriggerCondition {
    /// The triggering card is exactly this id.
    CardIs(CardId),
    /// The owner holds at least this many cards.
    HandSizeAtLeast(usize),
    /// The owner has at least this many creatures fielded.
    FieldCountAtLeast(usize),
    /// The opponent's field is empty.
    OpponentFieldEmpty,
    /// The owner holds at least this much energy of one affinity.
    EnergyAtLeast { affinity: Affinity, amount: u32 },
}

impl TriggerCondition {
    /// Evaluate against a context.
    #[must_use]
    pub fn evaluate(&self, ctx: &TriggerContext<'_>) -> bool {
        match self {
            TriggerCondition::CardIs(id) => ctx.card_id == Some(id),
            TriggerCondition::HandSizeAtLeast(n) => ctx.player.hand.len() >= *n,
            TriggerCondition::FieldCountAtLeast(n) => ctx.player.field_count() >= *n,
            TriggerCondition::OpponentFieldEmpty => ctx.opponent.field_count() == 0,
            TriggerCondition::EnergyAtLeast { affinity, amount } => {
                ctx.player.energy.get(*affinity) >= *amount
            }
        }
    }
}

//! Registered reactive effects.
//!
//! A trigger binds an owner, an event, an optional condition, and a
//! list of effects. Matching triggers are copied onto the game state's
//! FIFO queue when their event fires; the queue is drained to
//! exhaustion before the raising operation returns.

use serde::{Deserialize, Serialize};

use super::condition::TriggerCondition;
use super::event::TriggerEvent;
use crate::core::PlayerId;
use crate::effects::EffectDefinition;

/// Engine-assigned trigger identity. One-shot removal is by id, never
/// by pointer identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriggerId(pub u32);

impl TriggerId {
    /// Sentinel for "not yet registered".
    pub const UNASSIGNED: TriggerId = TriggerId(0);
}

impl std::fmt::Display for TriggerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Trigger({})", self.0)
    }
}

/// How long a trigger stays registered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerDuration {
    /// Removed from its owner's list immediately after firing once.
    #[default]
    OneShot,
    /// Stays registered for the rest of the round.
    UntilEndOfRound,
}

/// A registered reactive effect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    /// Assigned by the engine at registration.
    pub id: TriggerId,
    pub owner: PlayerId,
    pub event: TriggerEvent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<TriggerCondition>,
    /// Applied in order when the trigger fires, with the owner acting.
    pub effects: Vec<EffectDefinition>,
    pub duration: TriggerDuration,
}

impl Trigger {
    /// Create a one-shot trigger with no condition and no effects.
    #[must_use]
    pub fn new(owner: PlayerId, event: TriggerEvent) -> Self {
        Self {
            id: TriggerId::UNASSIGNED,
            owner,
            event,
            condition: None,
            effects: Vec::new(),
            duration: TriggerDuration::OneShot,
        }
    }

    /// Set the condition (builder pattern).
    #[must_use]
    pub fn with_condition(mut self, condition: TriggerCondition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Add an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: EffectDefinition) -> Self {
        self.effects.push(effect);
        self
    }

    /// Keep the trigger registered for the round (builder pattern).
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.duration = TriggerDuration::UntilEndOfRound;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{EffectKind, TargetSelector};

    #[test]
    fn test_trigger_builder() {
        let trigger = Trigger::new(PlayerId::A, TriggerEvent::OnSummon)
            .with_condition(TriggerCondition::CardIs("goblin".into()))
            .with_effect(EffectDefinition::new(
                EffectKind::DrawCards { count: 1 },
                TargetSelector::own(),
            ))
            .persistent();

        assert_eq!(trigger.id, TriggerId::UNASSIGNED);
        assert_eq!(trigger.owner, PlayerId::A);
        assert_eq!(trigger.event, TriggerEvent::OnSummon);
        assert_eq!(trigger.effects.len(), 1);
        assert_eq!(trigger.duration, TriggerDuration::UntilEndOfRound);
    }
}

//! Game events that can fire triggers.

use serde::{Deserialize, Serialize};

/// The closed set of events the engine raises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerEvent {
    OnStartPhase,
    OnEndPhase,
    OnDrawCard,
    OnSummon,
    OnTacticPlayed,
    OnCreatureDestroyed,
}

impl std::fmt::Display for TriggerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TriggerEvent::OnStartPhase => "OnStartPhase",
            TriggerEvent::OnEndPhase => "OnEndPhase",
            TriggerEvent::OnDrawCard => "OnDrawCard",
            TriggerEvent::OnSummon => "OnSummon",
            TriggerEvent::OnTacticPlayed => "OnTacticPlayed",
            TriggerEvent::OnCreatureDestroyed => "OnCreatureDestroyed",
        };
        write!(f, "{name}")
    }
}

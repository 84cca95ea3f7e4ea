//! Event-driven trigger system: events, data-driven conditions, and
//! the trigger records queued FIFO on the game state.

pub mod condition;
pub mod event;
pub mod trigger;

pub use condition::{TriggerCondition, TriggerContext};
pub use event::TriggerEvent;
pub use trigger::{Trigger, TriggerDuration, TriggerId};

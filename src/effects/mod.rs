//! Declarative effects, target selection, and the interpreter that
//! applies them to the game state.

pub mod effect;
pub mod resolver;
pub mod target;

pub use effect::{
    EffectDefinition, EffectDuration, EffectKind, EffectOverride, SummonParams,
};
pub use resolver::{EffectResolver, TargetRef};
pub use target::{AffinityFilter, OwnerScope, TargetSelector, Zone};

//! Round phases.

use serde::{Deserialize, Serialize};

/// Phases of one round, in fixed order.
///
/// Start, Draw, Battle, and End run automatically; Prepare, Summon,
/// and Action are player-driven priority phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Start,
    Draw,
    Prepare,
    Summon,
    Action,
    Battle,
    End,
}

impl Phase {
    /// The next phase in round order, if any.
    #[must_use]
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Start => Some(Phase::Draw),
            Phase::Draw => Some(Phase::Prepare),
            Phase::Prepare => Some(Phase::Summon),
            Phase::Summon => Some(Phase::Action),
            Phase::Action => Some(Phase::Battle),
            Phase::Battle => Some(Phase::End),
            Phase::End => None,
        }
    }

    /// Whether this phase runs without player input.
    #[must_use]
    pub fn is_automatic(self) -> bool {
        matches!(self, Phase::Start | Phase::Draw | Phase::Battle | Phase::End)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Start => "Start",
            Phase::Draw => "Draw",
            Phase::Prepare => "Prepare",
            Phase::Summon => "Summon",
            Phase::Action => "Action",
            Phase::Battle => "Battle",
            Phase::End => "End",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order() {
        let mut phase = Phase::Start;
        let mut order = vec![phase];
        while let Some(next) = phase.next() {
            order.push(next);
            phase = next;
        }
        assert_eq!(
            order,
            vec![
                Phase::Start,
                Phase::Draw,
                Phase::Prepare,
                Phase::Summon,
                Phase::Action,
                Phase::Battle,
                Phase::End,
            ]
        );
    }

    #[test]
    fn test_automatic_phases() {
        assert!(Phase::Start.is_automatic());
        assert!(Phase::Draw.is_automatic());
        assert!(!Phase::Prepare.is_automatic());
        assert!(!Phase::Summon.is_automatic());
        assert!(!Phase::Action.is_automatic());
        assert!(Phase::Battle.is_automatic());
        assert!(Phase::End.is_automatic());
    }
}

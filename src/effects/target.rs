//! Target selection for effects.
//!
//! A `TargetSelector` is data, not code: owner scope, optional zone,
//! and optional filters. The resolver turns it into an ordered list of
//! concrete references against the live game state.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardKind};
use crate::core::{Affinity, PlayerId};

/// Whose side a selector looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerScope {
    /// The acting player.
    #[serde(rename = "self")]
    Own,
    /// The acting player's opponent.
    Opponent,
    /// Both players, acting player first.
    Both,
}

impl OwnerScope {
    /// Players in scope, resolved relative to the actor.
    #[must_use]
    pub fn players(self, actor: PlayerId) -> Vec<PlayerId> {
        match self {
            OwnerScope::Own => vec![actor],
            OwnerScope::Opponent => vec![actor.opponent()],
            OwnerScope::Both => vec![PlayerId::A, PlayerId::B],
        }
    }
}

/// Zones a selector can scope to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    Field,
    Hand,
    Deck,
    Trash,
    Energy,
}

/// Affinity filter, including the negated `non-X` form.
///
/// Serializes as the affinity name, or the name prefixed with `non-`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AffinityFilter {
    Is(Affinity),
    Not(Affinity),
}

impl AffinityFilter {
    /// Whether a card of the given affinity passes this filter.
    #[must_use]
    pub fn matches(self, affinity: Affinity) -> bool {
        match self {
            AffinityFilter::Is(a) => a == affinity,
            AffinityFilter::Not(a) => a != affinity,
        }
    }
}

impl TryFrom<String> for AffinityFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if let Some(name) = value.strip_prefix("non-") {
            Ok(AffinityFilter::Not(name.parse()?))
        } else {
            Ok(AffinityFilter::Is(value.parse()?))
        }
    }
}

impl From<AffinityFilter> for String {
    fn from(filter: AffinityFilter) -> String {
        match filter {
            AffinityFilter::Is(a) => a.to_string(),
            AffinityFilter::Not(a) => format!("non-{a}"),
        }
    }
}

/// Declarative target selector.
///
/// With no zone, the selector yields one reference per scoped player
/// (player-level effects such as draws). A `Field` zone enumerates
/// occupied slots, filtered by the optional fields. `Hand`/`Deck`
/// zones stay player-level; the specific effect resolves the detail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSelector {
    pub owner: OwnerScope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<Zone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affinity: Option<AffinityFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CardId>,
    /// Truncate the candidate list to this many targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Shuffle candidates with the engine RNG before truncation.
    #[serde(default)]
    pub random: bool,
    /// Whitelist of 1-based field slot positions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec<usize>>,
}

impl TargetSelector {
    fn scoped(owner: OwnerScope) -> Self {
        Self {
            owner,
            zone: None,
            card_type: None,
            affinity: None,
            id: None,
            count: None,
            random: false,
            position: None,
        }
    }

    /// Selector over the acting player.
    #[must_use]
    pub fn own() -> Self {
        Self::scoped(OwnerScope::Own)
    }

    /// Selector over the opponent.
    #[must_use]
    pub fn opponent() -> Self {
        Self::scoped(OwnerScope::Opponent)
    }

    /// Selector over both players.
    #[must_use]
    pub fn both() -> Self {
        Self::scoped(OwnerScope::Both)
    }

    /// Scope to a zone (builder pattern).
    #[must_use]
    pub fn in_zone(mut self, zone: Zone) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Restrict to a card category (builder pattern).
    #[must_use]
    pub fn of_kind(mut self, kind: CardKind) -> Self {
        self.card_type = Some(kind);
        self
    }

    /// Restrict to an affinity filter (builder pattern).
    #[must_use]
    pub fn with_affinity(mut self, filter: AffinityFilter) -> Self {
        self.affinity = Some(filter);
        self
    }

    /// Restrict to an exact card id (builder pattern).
    #[must_use]
    pub fn with_id(mut self, id: impl Into<CardId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Truncate to `count` targets (builder pattern).
    #[must_use]
    pub fn limit(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Shuffle candidates before truncation (builder pattern).
    #[must_use]
    pub fn randomized(mut self) -> Self {
        self.random = true;
        self
    }

    /// Whitelist 1-based field positions (builder pattern).
    #[must_use]
    pub fn at_positions(mut self, positions: impl IntoIterator<Item = usize>) -> Self {
        self.position = Some(positions.into_iter().collect());
        self
    }
}

//! Card definitions - static card data.
//!
//! A `CardDefinition` is the immutable, library-level description of a
//! card: either a `Creature` (stats, cost) or a `Tactic` (timing
//! windows, declarative effects). In-play drift (buffs, damage) lives on
//! `CreatureInPlay`, never here.

use serde::{Deserialize, Serialize};

use crate::core::Affinity;
use crate::effects::EffectDefinition;
use crate::state::Phase;

/// Unique identifier for a card definition.
///
/// Identifies the card "type" (e.g. `goblin`), not an in-play instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a card id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// The two card categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Creature,
    Tactic,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Creature => write!(f, "Creature"),
            CardKind::Tactic => write!(f, "Tactic"),
        }
    }
}

/// Highest rarity stage. Stages run 0 (common) through 4 (mythic).
pub const MAX_STAGE: u8 = 4;

/// A creature card: occupies a field slot, fights in battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatureCard {
    pub id: CardId,
    pub name: String,
    pub affinity: Affinity,
    /// Rarity stage 0-4. Optional in raw data; the loader defaults it
    /// from the cost and clamps it into range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<u8>,
    pub cost: u32,
    pub atk: i32,
    pub hp: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl CreatureCard {
    /// Rarity stage, falling back to the loader's default rule when the
    /// raw datum never carried one.
    #[must_use]
    pub fn stage(&self) -> u8 {
        self.stage
            .unwrap_or_else(|| u8::try_from(self.cost).unwrap_or(MAX_STAGE))
            .min(MAX_STAGE)
    }
}

/// A tactic card: played into a chain, resolves declarative effects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TacticCard {
    pub id: CardId,
    pub name: String,
    pub affinity: Affinity,
    /// Phases this tactic may be played in.
    pub timing: Vec<Phase>,
    pub effects: Vec<EffectDefinition>,
    /// Whether this tactic may be played as the 2nd or 3rd link of a
    /// chain. The opening play is never restricted.
    pub chainable: bool,
    /// Free-form labels for external heuristics; the engine ignores them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A card definition: closed sum of the two categories.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CardDefinition {
    Creature(CreatureCard),
    Tactic(TacticCard),
}

impl CardDefinition {
    /// The card's id.
    #[must_use]
    pub fn id(&self) -> &CardId {
        match self {
            CardDefinition::Creature(c) => &c.id,
            CardDefinition::Tactic(t) => &t.id,
        }
    }

    /// The card's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            CardDefinition::Creature(c) => &c.name,
            CardDefinition::Tactic(t) => &t.name,
        }
    }

    /// The card's affinity.
    #[must_use]
    pub fn affinity(&self) -> Affinity {
        match self {
            CardDefinition::Creature(c) => c.affinity,
            CardDefinition::Tactic(t) => t.affinity,
        }
    }

    /// Which category this card belongs to.
    #[must_use]
    pub fn kind(&self) -> CardKind {
        match self {
            CardDefinition::Creature(_) => CardKind::Creature,
            CardDefinition::Tactic(_) => CardKind::Tactic,
        }
    }

    /// Borrow as a creature, if it is one.
    #[must_use]
    pub fn as_creature(&self) -> Option<&CreatureCard> {
        match self {
            CardDefinition::Creature(c) => Some(c),
            CardDefinition::Tactic(_) => None,
        }
    }

    /// Borrow as a tactic, if it is one.
    #[must_use]
    pub fn as_tactic(&self) -> Option<&TacticCard> {
        match self {
            CardDefinition::Tactic(t) => Some(t),
            CardDefinition::Creature(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new("goblin");
        assert_eq!(id.as_str(), "goblin");
        assert_eq!(format!("{id}"), "goblin");
        assert_eq!(id, CardId::from("goblin"));
    }

    #[test]
    fn test_creature_stage_defaults_to_cost() {
        let card = CreatureCard {
            id: "wisp".into(),
            name: "Wisp".into(),
            affinity: Affinity::Light,
            stage: None,
            cost: 2,
            atk: 1,
            hp: 1,
            keywords: Vec::new(),
        };
        assert_eq!(card.stage(), 2);
    }

    #[test]
    fn test_creature_stage_clamped() {
        let card = CreatureCard {
            id: "titan".into(),
            name: "Titan".into(),
            affinity: Affinity::Earth,
            stage: Some(9),
            cost: 7,
            atk: 9,
            hp: 9,
            keywords: Vec::new(),
        };
        assert_eq!(card.stage(), MAX_STAGE);
    }

    #[test]
    fn test_definition_tagged_parse() {
        let json = r#"{
            "type": "Creature",
            "id": "goblin",
            "name": "Goblin",
            "affinity": "Fire",
            "cost": 1,
            "atk": 2,
            "hp": 1
        }"#;
        let card: CardDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(card.kind(), CardKind::Creature);
        assert_eq!(card.id().as_str(), "goblin");
        assert_eq!(card.affinity(), Affinity::Fire);
        assert!(card.as_tactic().is_none());
    }
}

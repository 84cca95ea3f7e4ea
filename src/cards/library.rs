//! Card library and deck catalogues.
//!
//! Catalogues are versioned JSON documents. Loading validates the
//! schema version and the affinity list, then normalizes each card the
//! same way the offline converter does, so un-normalized data behaves
//! identically whichever path it arrives through.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId, MAX_STAGE};
use crate::core::{Affinity, GameError, GameResult};

/// Catalogue schema version this engine understands.
pub const SCHEMA_VERSION: u32 = 1;

/// One (card id, count) line of a deck list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub id: CardId,
    pub count: u32,
}

/// A named deck list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckList {
    pub id: String,
    pub name: String,
    /// Declared deck size. Callers validate it against the expansion;
    /// the engine itself does not.
    pub size: u32,
    pub cards: Vec<DeckEntry>,
}

impl DeckList {
    /// Flatten the (id, count) pairs into a repeated id sequence,
    /// preserving list order.
    #[must_use]
    pub fn expand(&self) -> Vec<CardId> {
        let mut out = Vec::with_capacity(self.size as usize);
        for entry in &self.cards {
            for _ in 0..entry.count {
                out.push(entry.id.clone());
            }
        }
        out
    }

    /// Whether the declared size matches the expansion.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.cards.iter().map(|e| e.count).sum::<u32>() == self.size
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardsFile {
    schema_version: u32,
    affinities: Vec<String>,
    cards: Vec<CardDefinition>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DecksFile {
    schema_version: u32,
    decks: Vec<DeckList>,
}

/// Normalize one card the way the offline converter does.
///
/// Creatures get a rarity stage defaulted from their cost and clamped
/// into range; tactic timing windows are deduplicated preserving first
/// occurrence.
fn normalize(card: CardDefinition) -> CardDefinition {
    match card {
        CardDefinition::Creature(mut c) => {
            let stage = c
                .stage
                .unwrap_or_else(|| u8::try_from(c.cost).unwrap_or(MAX_STAGE));
            c.stage = Some(stage.min(MAX_STAGE));
            CardDefinition::Creature(c)
        }
        CardDefinition::Tactic(mut t) => {
            let mut seen = Vec::with_capacity(t.timing.len());
            t.timing.retain(|phase| {
                if seen.contains(phase) {
                    false
                } else {
                    seen.push(*phase);
                    true
                }
            });
            CardDefinition::Tactic(t)
        }
    }
}

/// Immutable id -> definition catalogue, built once per engine.
#[derive(Clone, Debug, Default)]
pub struct CardLibrary {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardLibrary {
    /// Build a library from definitions, normalizing each card.
    pub fn from_cards(cards: impl IntoIterator<Item = CardDefinition>) -> Self {
        let cards = cards
            .into_iter()
            .map(normalize)
            .map(|card| (card.id().clone(), card))
            .collect();
        Self { cards }
    }

    /// Parse a versioned card catalogue.
    pub fn from_json(json: &str) -> GameResult<Self> {
        let file: CardsFile = serde_json::from_str(json)?;
        if file.schema_version != SCHEMA_VERSION {
            return Err(GameError::UnsupportedSchema {
                found: file.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        for name in &file.affinities {
            name.parse::<Affinity>()
                .map_err(|_| GameError::UnknownAffinity(name.clone()))?;
        }
        Ok(Self::from_cards(file.cards))
    }

    /// The starter catalogue shipped with the crate.
    pub fn load_starter() -> GameResult<Self> {
        Self::from_json(include_str!("../../data/cards.json"))
    }

    /// Look up a definition.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardDefinition> {
        self.cards.get(id)
    }

    /// Whether the library knows this id.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate all definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }
}

/// Parse a versioned deck-list catalogue.
pub fn load_deck_catalogue(json: &str) -> GameResult<Vec<DeckList>> {
    let file: DecksFile = serde_json::from_str(json)?;
    if file.schema_version != SCHEMA_VERSION {
        return Err(GameError::UnsupportedSchema {
            found: file.schema_version,
            expected: SCHEMA_VERSION,
        });
    }
    Ok(file.decks)
}

/// The starter deck lists shipped with the crate.
pub fn load_starter_decks() -> GameResult<Vec<DeckList>> {
    load_deck_catalogue(include_str!("../../data/decks.json"))
}

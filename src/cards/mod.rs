//! Card definitions, the card library, and deck lists.

pub mod definition;
pub mod library;

pub use definition::{CardDefinition, CardId, CardKind, CreatureCard, TacticCard, MAX_STAGE};
pub use library::{
    load_deck_catalogue, load_starter_decks, CardLibrary, DeckEntry, DeckList, SCHEMA_VERSION,
};

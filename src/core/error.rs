//! Error taxonomy for engine operations.
//!
//! Three families: sequencing (wrong phase, wrong player, chain
//! misuse), resource (energy, missing cards), and data (unknown ids,
//! bad catalogues). Round-ending conditions are not errors; they are
//! recorded as a `RoundResult` on the state.

use thiserror::Error;

use crate::cards::{CardId, CardKind};
use crate::core::energy::Affinity;
use crate::core::player::PlayerId;
use crate::state::Phase;

/// Result alias for engine operations.
pub type GameResult<T> = Result<T, GameError>;

/// Any violation raised by a public engine operation.
#[derive(Debug, Error)]
pub enum GameError {
    // === Sequencing ===
    #[error("action only allowed during {expected} phase (currently {actual})")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("resolve the open chain first")]
    ChainOpen,

    #[error("{0} is not the expected responder in this chain")]
    NotExpectedResponder(PlayerId),

    #[error("chain is full")]
    ChainFull,

    #[error("tactic `{0}` is not chainable and cannot respond")]
    NotChainable(CardId),

    #[error("tactic `{card}` cannot be played during {phase}")]
    TimingNotAllowed { card: CardId, phase: Phase },

    #[error("round already finished")]
    RoundFinished,

    #[error("current round not finished")]
    RoundUnfinished,

    #[error("match already decided")]
    MatchDecided,

    // === Resource ===
    #[error("insufficient {affinity} energy for cost {cost}")]
    InsufficientEnergy { affinity: Affinity, cost: u32 },

    #[error("card `{0}` not in hand")]
    CardNotInHand(CardId),

    #[error("card `{0}` not in deck")]
    CardNotInDeck(CardId),

    #[error("no empty field slot")]
    FieldFull,

    // === Data ===
    #[error("unknown card `{0}`")]
    UnknownCard(CardId),

    #[error("card `{card}` is not a {expected}")]
    WrongCardType { card: CardId, expected: CardKind },

    #[error("deck references unknown card `{0}`")]
    UnknownDeckCard(CardId),

    #[error("unsupported schema version {found} (expected {expected})")]
    UnsupportedSchema { found: u32, expected: u32 },

    #[error("unknown affinity in data: {0}")]
    UnknownAffinity(String),

    #[error("invalid catalogue data: {0}")]
    Data(#[from] serde_json::Error),
}

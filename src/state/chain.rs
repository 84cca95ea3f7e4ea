//! Chain negotiation state.
//!
//! A chain exists only while reactive tactic plays are being
//! negotiated; it is destroyed on resolution. Plays resolve LIFO, so a
//! response resolves before the play it answered.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::TacticCard;
use crate::core::PlayerId;

/// Maximum plays in one chain.
pub const CHAIN_LIMIT: usize = 3;

/// One recorded tactic play.
///
/// The card is a per-play copy: effect overrides selected at play time
/// are already baked into it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChainPlay {
    pub player: PlayerId,
    pub card: TacticCard,
}

/// An open chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChainState {
    /// Who opened the chain.
    pub starter: PlayerId,
    /// Plays in play order; resolution walks this backwards.
    pub plays: SmallVec<[ChainPlay; CHAIN_LIMIT]>,
    /// Who may respond next; `None` once the chain is ready to resolve
    /// on a pass.
    pub expected_responder: Option<PlayerId>,
}

impl ChainState {
    /// Open a chain with its first play recorded.
    #[must_use]
    pub fn open(starter: PlayerId, card: TacticCard) -> Self {
        let mut plays = SmallVec::new();
        plays.push(ChainPlay {
            player: starter,
            card,
        });
        Self {
            starter,
            plays,
            expected_responder: Some(starter.opponent()),
        }
    }

    /// Whether the chain holds its maximum number of plays.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.plays.len() >= CHAIN_LIMIT
    }
}

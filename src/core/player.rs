//! Player identity and per-player storage.
//!
//! The engine is strictly two-player: `PlayerId` is a closed enum and
//! `PlayerPair<T>` stores one `T` per player with `Index` access, so
//! per-player state can never be missing or duplicated.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the two logical players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    A,
    B,
}

impl PlayerId {
    /// The other player.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::A => PlayerId::B,
            PlayerId::B => PlayerId::A,
        }
    }

    /// Both players, A first.
    #[must_use]
    pub const fn both() -> [PlayerId; 2] {
        [PlayerId::A, PlayerId::B]
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::A => write!(f, "A"),
            PlayerId::B => write!(f, "B"),
        }
    }
}

/// A value per player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    pub a: T,
    pub b: T,
}

impl<T> PlayerPair<T> {
    /// Create a pair from the two values.
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    /// Build a pair by calling `f` for each player.
    pub fn from_fn(mut f: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            a: f(PlayerId::A),
            b: f(PlayerId::B),
        }
    }

    /// Iterate (player, value) pairs, A first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        [(PlayerId::A, &self.a), (PlayerId::B, &self.b)].into_iter()
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        match player {
            PlayerId::A => &self.a,
            PlayerId::B => &self.b,
        }
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        match player {
            PlayerId::A => &mut self.a,
            PlayerId::B => &mut self.b,
        }
    }
}

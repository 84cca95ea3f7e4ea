//! Core leaves: player identity, deterministic RNG, energy economy,
//! and the error taxonomy.

pub mod energy;
pub mod error;
pub mod player;
pub mod rng;

pub use energy::{Affinity, EnergyPool};
pub use error::{GameError, GameResult};
pub use player::{PlayerId, PlayerPair};
pub use rng::{GameRng, Seed};

//! Core engine types: seats, randomness, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{GameError, SetupError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, RandomExt, RandomSource, ScriptedRng};

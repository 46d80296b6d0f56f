//! Error types.
//!
//! `SetupError` covers defects found while building a game; the game refuses
//! to start rather than run with an inconsistent deal. `GameError` covers
//! misuse of a running game. Bad user input is never an error: human
//! controllers re-prompt in place.

use crate::cards::{Card, Character, Room};
use crate::core::PlayerId;

/// A game could not be set up consistently.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Player count outside the supported range.
    #[display("Player count must be {min}-{max}, got {count}")]
    InvalidPlayerCount {
        /// Requested seats.
        count: usize,
        /// Smallest supported table.
        min: usize,
        /// Largest supported table.
        max: usize,
    },

    /// A solution card ended up in a player's hand.
    #[display("Solution card {_0} was dealt to a player")]
    SolutionCardDealt(Card),

    /// A card appears in more than one hand (or twice in one hand).
    #[display("Card {_0} was dealt more than once")]
    DuplicateCard(Card),

    /// Hands plus solution do not cover the card universe.
    #[display("Expected {expected} cards in hands and solution, found {actual}")]
    CardCountMismatch {
        /// Size of the card universe.
        expected: usize,
        /// Cards accounted for.
        actual: usize,
    },

    /// The topology does not contain a character's start room.
    #[display("{character} starts in {room}, which is not on the board")]
    StartRoomOffBoard {
        /// The character being placed.
        character: Character,
        /// The start room the topology reported.
        room: Room,
    },
}

impl std::error::Error for SetupError {}

/// A running game was asked to do something it cannot.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// `run` hit the configured turn cap without a result.
    #[display("No result after {_0} turns")]
    TurnLimitReached(u32),

    /// No such seat at this table.
    #[display("{_0} is not seated at this table")]
    UnknownPlayer(PlayerId),
}

impl std::error::Error for GameError {}

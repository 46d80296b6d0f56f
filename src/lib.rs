//! # rust-cluedo
//!
//! A deduction board-game engine: a text-playable Cluedo for 2-6 players,
//! mixing human and computer detectives.
//!
//! ## Design Principles
//!
//! 1. **Hidden information stays hidden**: only the `Game` knows the
//!    solution; a shown card reaches the suggester and nobody else.
//!
//! 2. **One decision interface**: humans and computers are both
//!    `Controller`s. The orchestrator never asks which one it is talking to.
//!
//! 3. **Injectable randomness**: every random choice, from the deal to a
//!    computer's move, comes from a `RandomSource` handed in at setup. Same
//!    seed, same game.
//!
//! ## Modules
//!
//! - `core`: Player IDs, RNG, configuration, errors
//! - `cards`: Categories, cards, scenarios, dealing
//! - `board`: Room graph and token positions
//! - `deduction`: The computer players' clue sheet
//! - `players`: Seats and their controllers
//! - `rules`: Refutation scan, accusation verdicts, results
//! - `game`: Setup, the turn state machine, narration
//! - `console`: Terminal input and narration for the `cluedo` binary

pub mod board;
pub mod cards;
pub mod console;
pub mod core;
pub mod deduction;
pub mod game;
pub mod players;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, PlayerId, PlayerMap, RandomExt, RandomSource, ScriptedRng,
    SetupError, MAX_PLAYERS, MIN_PLAYERS,
};

pub use crate::cards::{Card, Category, Character, Deal, Deck, Room, Scenario, Weapon, CARD_COUNT};

pub use crate::board::{BoardState, Mansion, Token, Topology};

pub use crate::deduction::{ClueSheet, Holder, RefutationNote};

pub use crate::players::{
    ComputerController, Controller, ControllerKind, HumanController, InputProvider, Player,
    TurnChoice, TurnView,
};

pub use crate::rules::{AccusationOutcome, GameResult, Refutation, Suggestion, Verdict};

pub use crate::game::{
    EventSink, Game, GameBuilder, GameEvent, GameStatus, NullSink, Seat, TracingSink, TurnAction,
    TurnPhase, TurnReport,
};

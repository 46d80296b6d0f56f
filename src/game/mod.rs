//! Game orchestration.
//!
//! - `GameBuilder`: seats, configuration and setup
//! - `Game`: the orchestrator and its turn phases
//! - `TurnPhase` / `TurnReport`: the per-turn state machine
//! - `GameEvent` / `EventSink`: narration

pub mod builder;
pub mod events;
pub mod orchestrator;
pub mod turn;

pub use builder::{GameBuilder, Seat};
pub use events::{EventSink, GameEvent, NullSink, TracingSink};
pub use orchestrator::{Game, GameStatus};
pub use turn::{TurnAction, TurnPhase, TurnReport};

//! Players and the controllers that make their decisions.
//!
//! - `Player`: identity, hand, `has_lost` flag
//! - `Controller`: one decision interface, two variants
//!   (`ComputerController`, `HumanController`)
//! - `InputProvider`: where a human controller's raw choices come from

pub mod computer;
pub mod controller;
pub mod human;
pub mod player;

pub use computer::ComputerController;
pub use controller::{Controller, ControllerKind, TurnView};
pub use human::{HumanController, InputProvider, TurnChoice};
pub use player::Player;

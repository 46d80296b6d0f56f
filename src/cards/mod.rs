//! Card system: categories, the tagged card union, scenarios and dealing.
//!
//! ## Key Types
//!
//! - `Character`, `Weapon`, `Room`: the closed category enums
//! - `Card`: one card of any category
//! - `Scenario`: a character + weapon + room triple (solution, suggestion, accusation)
//! - `Deck` / `Deal`: solution draw and round-robin dealing

pub mod card;
pub mod deck;
pub mod scenario;
pub mod token;

pub use card::{Card, Category, CARD_COUNT};
pub use deck::{Deal, Deck};
pub use scenario::Scenario;
pub use token::{Character, Room, Weapon};

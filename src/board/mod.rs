//! Board topology and token positions.
//!
//! - `Topology`: the static room graph (trait) and `Mansion`, the reference board
//! - `BoardState`: where each character and weapon token currently is

pub mod state;
pub mod topology;

pub use state::{BoardState, Token};
pub use topology::{Mansion, Topology};

//! Game rules that are independent of turn sequencing.
//!
//! - `Suggestion` / `Refutation`: a suggestion and who answered it
//! - `find_refuter` / `process_refutations`: the refutation scan
//! - `Verdict` / `AccusationOutcome`: judging accusations
//! - `GameResult`: how a game ends

pub mod accusation;
pub mod refutation;
pub mod result;
pub mod suggestion;

pub use accusation::{AccusationOutcome, Verdict};
pub use refutation::{find_refuter, process_refutations};
pub use result::GameResult;
pub use suggestion::{Refutation, Suggestion};

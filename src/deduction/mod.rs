//! Computer players' deduction engine.
//!
//! See [`ClueSheet`] for the knowledge model and its deliberate limits.

pub mod clue_sheet;

pub use clue_sheet::{ClueSheet, Holder, RefutationNote};

//! The decision interface shared by human and computer players.
//!
//! The orchestrator never asks what kind of player it is talking to; it
//! calls the same [`Controller`] methods for every seat and only uses
//! [`ControllerKind`] for pacing and display.

use crate::board::Topology;
use crate::cards::{Card, Character, Room, Scenario};
use crate::core::{PlayerId, RandomSource};
use crate::deduction::ClueSheet;
use crate::rules::{Refutation, Suggestion};

/// Who is making the decisions for a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControllerKind {
    Computer,
    Human,
}

/// What a controller sees when it is asked to act on its own turn.
#[derive(Clone, Copy)]
pub struct TurnView<'a> {
    /// The acting seat.
    pub me: PlayerId,
    /// The acting seat's character token.
    pub character: Character,
    /// Room the token is currently in.
    pub room: Room,
    /// The acting seat's hand.
    pub hand: &'a [Card],
    /// Board graph.
    pub topology: &'a dyn Topology,
}

impl std::fmt::Debug for TurnView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnView")
            .field("me", &self.me)
            .field("character", &self.character)
            .field("room", &self.room)
            .field("hand", &self.hand)
            .finish_non_exhaustive()
    }
}

/// Decision-making for one seat.
pub trait Controller {
    /// Human or computer.
    fn kind(&self) -> ControllerKind;

    /// At the start of a turn: accuse now (`Some`) or move (`None`).
    fn decide_accusation(
        &mut self,
        view: &TurnView<'_>,
        rng: &mut dyn RandomSource,
    ) -> Option<Scenario>;

    /// Pick a destination from `options`; `None` stays put.
    fn decide_move(
        &mut self,
        view: &TurnView<'_>,
        options: &[Room],
        rng: &mut dyn RandomSource,
    ) -> Option<Room>;

    /// Name a character and weapon. The room must be `view.room`.
    fn decide_suggestion(&mut self, view: &TurnView<'_>, rng: &mut dyn RandomSource) -> Scenario;

    /// Pick which of `matching` (never empty) to show the suggester.
    fn choose_card_to_show(&mut self, suggestion: &Suggestion, matching: &[Card]) -> Card;

    /// Learn from a suggestion's outcome. Only the suggester's refutation
    /// carries the shown card.
    fn update_knowledge(&mut self, suggestion: &Suggestion, refutation: &Refutation);

    /// The controller's clue sheet, if it keeps one.
    fn clue_sheet(&self) -> Option<&ClueSheet> {
        None
    }
}

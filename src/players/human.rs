//! Human-controlled seats.
//!
//! The human controller turns raw choices from an [`InputProvider`] into
//! legal decisions. A choice that is not among the offered options is
//! reported back to the provider and asked again; it never reaches the game.

use tracing::warn;

use super::controller::{Controller, ControllerKind, TurnView};
use crate::cards::{Card, Character, Room, Scenario, Weapon};
use crate::core::{PlayerId, RandomSource};
use crate::rules::{Refutation, Suggestion};

/// What a human chooses to do at the start of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnChoice {
    Move,
    Accuse,
}

/// Where human decisions come from (console, UI, test script).
pub trait InputProvider {
    /// Move this turn, or make an accusation.
    fn choose_action(&mut self, view: &TurnView<'_>) -> TurnChoice;

    /// Pick a destination from `options` (never empty).
    fn choose_move(&mut self, view: &TurnView<'_>, options: &[Room]) -> Room;

    /// Name a character and weapon for a suggestion in `view.room`.
    fn choose_suggestion(&mut self, view: &TurnView<'_>) -> (Character, Weapon);

    /// Name the full accusation.
    fn choose_accusation(&mut self, view: &TurnView<'_>) -> Scenario;

    /// Pick which card to show; `candidates` has at least two cards.
    fn choose_card_to_show(
        &mut self,
        shower: PlayerId,
        suggestion: &Suggestion,
        candidates: &[Card],
    ) -> Card;

    /// Tell the human their last answer was not acceptable.
    fn reject(&mut self, _message: &str) {}
}

/// A seat whose decisions come from a person.
pub struct HumanController {
    me: PlayerId,
    input: Box<dyn InputProvider>,
    seen: Vec<(PlayerId, Card)>,
}

impl HumanController {
    /// Create a controller for seat `me`.
    pub fn new(me: PlayerId, input: Box<dyn InputProvider>) -> Self {
        Self {
            me,
            input,
            seen: Vec::new(),
        }
    }

    /// Cards shown to this player so far, with who showed them.
    #[must_use]
    pub fn seen_cards(&self) -> &[(PlayerId, Card)] {
        &self.seen
    }
}

impl std::fmt::Debug for HumanController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HumanController")
            .field("me", &self.me)
            .field("seen", &self.seen)
            .finish_non_exhaustive()
    }
}

impl Controller for HumanController {
    fn kind(&self) -> ControllerKind {
        ControllerKind::Human
    }

    fn decide_accusation(
        &mut self,
        view: &TurnView<'_>,
        _rng: &mut dyn RandomSource,
    ) -> Option<Scenario> {
        match self.input.choose_action(view) {
            TurnChoice::Move => None,
            TurnChoice::Accuse => Some(self.input.choose_accusation(view)),
        }
    }

    fn decide_move(
        &mut self,
        view: &TurnView<'_>,
        options: &[Room],
        _rng: &mut dyn RandomSource,
    ) -> Option<Room> {
        if options.is_empty() {
            return None;
        }
        loop {
            let room = self.input.choose_move(view, options);
            if options.contains(&room) {
                return Some(room);
            }
            warn!(player = %self.me, %room, "Rejected move choice");
            self.input.reject(&format!("You cannot reach the {room} from here."));
        }
    }

    fn decide_suggestion(&mut self, view: &TurnView<'_>, _rng: &mut dyn RandomSource) -> Scenario {
        let (character, weapon) = self.input.choose_suggestion(view);
        Scenario::new(character, weapon, view.room)
    }

    /// A single match is shown without asking.
    fn choose_card_to_show(&mut self, suggestion: &Suggestion, matching: &[Card]) -> Card {
        if let [only] = matching {
            return *only;
        }
        loop {
            let card = self.input.choose_card_to_show(self.me, suggestion, matching);
            if matching.contains(&card) {
                return card;
            }
            warn!(player = %self.me, %card, "Rejected card choice");
            self.input.reject(&format!("{card} does not match the suggestion."));
        }
    }

    fn update_knowledge(&mut self, suggestion: &Suggestion, refutation: &Refutation) {
        if suggestion.suggester != self.me {
            return;
        }
        if let (Some(refuter), Some(card)) = (refutation.refuter, refutation.shown) {
            self.seen.push((refuter, card));
        }
    }
}

//! A seat at the table.
//!
//! A player is never removed from the table. After a wrong accusation the
//! `has_lost` flag is set for good: the seat is skipped on its own turns but
//! still answers refutation checks with its hand.

use smallvec::SmallVec;

use super::controller::{Controller, ControllerKind};
use crate::cards::{Card, Character, Scenario};
use crate::core::PlayerId;

/// A participant: identity, dealt hand, elimination flag and controller.
pub struct Player {
    id: PlayerId,
    name: String,
    character: Character,
    hand: Vec<Card>,
    pub(crate) has_lost: bool,
    pub(crate) controller: Box<dyn Controller>,
}

impl Player {
    /// Create a player with a dealt hand.
    pub fn new(
        id: PlayerId,
        character: Character,
        hand: Vec<Card>,
        controller: Box<dyn Controller>,
    ) -> Self {
        Self {
            id,
            name: id.to_string(),
            character,
            hand,
            has_lost: false,
            controller,
        }
    }

    /// Seat number.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name ("Player 1", ...).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The character token this player moves.
    #[must_use]
    pub fn character(&self) -> Character {
        self.character
    }

    /// Cards dealt to this player, in deal order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Has this player made a wrong accusation?
    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.has_lost
    }

    /// Human or computer.
    #[must_use]
    pub fn kind(&self) -> ControllerKind {
        self.controller.kind()
    }

    /// Read access to the controller (e.g. for a computer's clue sheet).
    #[must_use]
    pub fn controller(&self) -> &dyn Controller {
        self.controller.as_ref()
    }

    /// The hand alongside a mutable controller, so the controller can be
    /// asked to decide with its own hand in view.
    pub(crate) fn hand_and_controller(&mut self) -> (&[Card], &mut dyn Controller) {
        (&self.hand, self.controller.as_mut())
    }

    /// Cards in hand that the scenario names, in hand order.
    #[must_use]
    pub fn matching_cards(&self, scenario: &Scenario) -> SmallVec<[Card; 3]> {
        self.hand
            .iter()
            .copied()
            .filter(|&card| scenario.contains(card))
            .collect()
    }

    /// Can this player refute the scenario?
    #[must_use]
    pub fn can_refute(&self, scenario: &Scenario) -> bool {
        self.hand.iter().any(|&card| scenario.contains(card))
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("character", &self.character)
            .field("hand", &self.hand)
            .field("has_lost", &self.has_lost)
            .field("kind", &self.kind())
            .finish()
    }
}

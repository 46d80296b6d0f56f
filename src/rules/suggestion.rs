//! Suggestions and their refutation outcome.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Scenario};
use crate::core::PlayerId;

/// A suggestion made from inside a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// Who made it.
    pub suggester: PlayerId,
    /// What was suggested; `scenario.room` is the suggester's room.
    pub scenario: Scenario,
}

impl Suggestion {
    /// Create a new suggestion.
    #[must_use]
    pub const fn new(suggester: PlayerId, scenario: Scenario) -> Self {
        Self {
            suggester,
            scenario,
        }
    }

    /// The three suggested cards.
    #[must_use]
    pub fn cards(&self) -> [Card; 3] {
        self.scenario.cards()
    }
}

/// Result of asking the table to refute a suggestion.
///
/// `shown` is private to the suggester.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refutation {
    pub refuter: Option<PlayerId>,
    pub shown: Option<Card>,
}

impl Refutation {
    /// Nobody could refute.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            refuter: None,
            shown: None,
        }
    }

    /// `refuter` showed `card`.
    #[must_use]
    pub const fn by(refuter: PlayerId, card: Card) -> Self {
        Self {
            refuter: Some(refuter),
            shown: Some(card),
        }
    }

    /// The view every player other than the suggester gets: who refuted,
    /// but not which card.
    #[must_use]
    pub const fn public_view(&self) -> Self {
        Self {
            refuter: self.refuter,
            shown: None,
        }
    }
}

//! One character, one weapon, one room.
//!
//! The same triple shape is used for the hidden solution, for suggestions
//! and for accusations.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::token::{Character, Room, Weapon};

/// A complete who/what/where triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scenario {
    pub character: Character,
    pub weapon: Weapon,
    pub room: Room,
}

impl Scenario {
    /// Create a new scenario.
    #[must_use]
    pub const fn new(character: Character, weapon: Weapon, room: Room) -> Self {
        Self {
            character,
            weapon,
            room,
        }
    }

    /// The three cards, in category order.
    #[must_use]
    pub fn cards(&self) -> [Card; 3] {
        [
            Card::Character(self.character),
            Card::Weapon(self.weapon),
            Card::Room(self.room),
        ]
    }

    /// Does this scenario name the given card?
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        match card {
            Card::Character(c) => c == self.character,
            Card::Weapon(w) => w == self.weapon,
            Card::Room(r) => r == self.room,
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} with the {} in the {}", self.character, self.weapon, self.room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_checks_matching_category_only() {
        let s = Scenario::new(Character::MrsWhite, Weapon::Rope, Room::Study);

        assert!(s.contains(Card::Character(Character::MrsWhite)));
        assert!(s.contains(Card::Weapon(Weapon::Rope)));
        assert!(s.contains(Card::Room(Room::Study)));
        assert!(!s.contains(Card::Room(Room::Hall)));
    }

    #[test]
    fn test_display() {
        let s = Scenario::new(Character::ProfessorPlum, Weapon::Wrench, Room::Study);
        assert_eq!(s.to_string(), "Professor Plum with the Wrench in the Study");
    }
}

//! The tagged card union.
//!
//! A `Card` is exactly one of a character, weapon or room. Matching on it is
//! exhaustive, so every place that dispatches on category (elimination,
//! token movement, menus) is checked at build time.

use serde::{Deserialize, Serialize};

use super::token::{Character, Room, Weapon};

/// Number of cards in the full universe.
pub const CARD_COUNT: usize = Character::ALL.len() + Weapon::ALL.len() + Room::ALL.len();

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Character,
    Weapon,
    Room,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Category::Character => "Character",
            Category::Weapon => "Weapon",
            Category::Room => "Room",
        })
    }
}

/// A single card of any category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    Character(Character),
    Weapon(Weapon),
    Room(Room),
}

impl Card {
    /// The category this card belongs to.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Card::Character(_) => Category::Character,
            Card::Weapon(_) => Category::Weapon,
            Card::Room(_) => Category::Room,
        }
    }

    /// Display name without the category tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Card::Character(c) => c.name(),
            Card::Weapon(w) => w.name(),
            Card::Room(r) => r.name(),
        }
    }

    /// Every card: characters, then weapons, then rooms.
    pub fn universe() -> impl Iterator<Item = Card> {
        Character::ALL
            .into_iter()
            .map(Card::Character)
            .chain(Weapon::ALL.into_iter().map(Card::Weapon))
            .chain(Room::ALL.into_iter().map(Card::Room))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Character> for Card {
    fn from(c: Character) -> Self {
        Card::Character(c)
    }
}

impl From<Weapon> for Card {
    fn from(w: Weapon) -> Self {
        Card::Weapon(w)
    }
}

impl From<Room> for Card {
    fn from(r: Room) -> Self {
        Card::Room(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_universe_is_complete_and_distinct() {
        let all: Vec<_> = Card::universe().collect();
        assert_eq!(all.len(), CARD_COUNT);
        assert_eq!(CARD_COUNT, 21);

        let distinct: HashSet<_> = all.iter().collect();
        assert_eq!(distinct.len(), all.len());
    }

    #[test]
    fn test_category_dispatch() {
        assert_eq!(Card::from(Character::MrsPeacock).category(), Category::Character);
        assert_eq!(Card::from(Weapon::Revolver).category(), Category::Weapon);
        assert_eq!(Card::from(Room::Hall).category(), Category::Room);
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::from(Room::DiningRoom).to_string(), "Dining Room");
    }
}

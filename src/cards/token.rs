//! The three closed card categories.
//!
//! Each category is a plain enum with an `ALL` table in canonical order.
//! The canonical order matters: it is the order menus are shown in, the
//! order solution draws index into, and the fallback order for suggestions.

use serde::{Deserialize, Serialize};

/// A suspect. Also names the token a player moves around the mansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Character {
    MissScarlett,
    ColonelMustard,
    MrsWhite,
    ReverendGreen,
    MrsPeacock,
    ProfessorPlum,
}

impl Character {
    /// Every character, in seating order.
    pub const ALL: [Character; 6] = [
        Character::MissScarlett,
        Character::ColonelMustard,
        Character::MrsWhite,
        Character::ReverendGreen,
        Character::MrsPeacock,
        Character::ProfessorPlum,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Character::MissScarlett => "Miss Scarlett",
            Character::ColonelMustard => "Colonel Mustard",
            Character::MrsWhite => "Mrs. White",
            Character::ReverendGreen => "Reverend Green",
            Character::MrsPeacock => "Mrs. Peacock",
            Character::ProfessorPlum => "Professor Plum",
        }
    }
}

/// A weapon card and token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weapon {
    Candlestick,
    Dagger,
    LeadPipe,
    Revolver,
    Rope,
    Wrench,
}

impl Weapon {
    /// Every weapon, in canonical order.
    pub const ALL: [Weapon; 6] = [
        Weapon::Candlestick,
        Weapon::Dagger,
        Weapon::LeadPipe,
        Weapon::Revolver,
        Weapon::Rope,
        Weapon::Wrench,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Weapon::Candlestick => "Candlestick",
            Weapon::Dagger => "Dagger",
            Weapon::LeadPipe => "Lead Pipe",
            Weapon::Revolver => "Revolver",
            Weapon::Rope => "Rope",
            Weapon::Wrench => "Wrench",
        }
    }
}

/// A room card and a node of the board graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Room {
    Kitchen,
    Ballroom,
    Conservatory,
    DiningRoom,
    BilliardRoom,
    Library,
    Lounge,
    Hall,
    Study,
}

impl Room {
    /// Every room, in canonical order.
    pub const ALL: [Room; 9] = [
        Room::Kitchen,
        Room::Ballroom,
        Room::Conservatory,
        Room::DiningRoom,
        Room::BilliardRoom,
        Room::Library,
        Room::Lounge,
        Room::Hall,
        Room::Study,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Room::Kitchen => "Kitchen",
            Room::Ballroom => "Ballroom",
            Room::Conservatory => "Conservatory",
            Room::DiningRoom => "Dining Room",
            Room::BilliardRoom => "Billiard Room",
            Room::Library => "Library",
            Room::Lounge => "Lounge",
            Room::Hall => "Hall",
            Room::Study => "Study",
        }
    }
}

macro_rules! display_by_name {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.name())
                }
            }
        )*
    };
}

display_by_name!(Character, Weapon, Room);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_sizes() {
        assert_eq!(Character::ALL.len(), 6);
        assert_eq!(Weapon::ALL.len(), 6);
        assert_eq!(Room::ALL.len(), 9);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Character::MrsWhite.to_string(), "Mrs. White");
        assert_eq!(Weapon::LeadPipe.to_string(), "Lead Pipe");
        assert_eq!(Room::BilliardRoom.to_string(), "Billiard Room");
    }

    #[test]
    fn test_all_tables_are_sorted() {
        assert!(Character::ALL.windows(2).all(|w| w[0] < w[1]));
        assert!(Weapon::ALL.windows(2).all(|w| w[0] < w[1]));
        assert!(Room::ALL.windows(2).all(|w| w[0] < w[1]));
    }
}

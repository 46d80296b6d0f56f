//! Static board graph.
//!
//! The engine only asks the topology three things: which rooms neighbour a
//! room, where a room's secret passage leads, and where each character
//! starts. Hallways are abstracted away; moving to a neighbouring room costs
//! one move regardless of any die.

use crate::cards::{Character, Room};

/// Read-only board graph.
pub trait Topology {
    /// Rooms reachable in one move, in a stable order.
    fn adjacent_rooms(&self, room: Room) -> &[Room];

    /// Destination of the secret passage leaving `room`, if there is one.
    fn secret_passage(&self, room: Room) -> Option<Room>;

    /// The room a character's token starts in.
    fn start_position(&self, character: Character) -> Room;

    /// Is `room` a room node on this board (as opposed to a hallway)?
    ///
    /// Entering a room node triggers a suggestion.
    fn has_room(&self, room: Room) -> bool;

    /// Every destination a player in `room` may choose: neighbours first,
    /// then the secret passage destination if it is not already listed.
    fn move_options(&self, room: Room) -> Vec<Room> {
        let mut options = self.adjacent_rooms(room).to_vec();
        if let Some(dest) = self.secret_passage(room) {
            if !options.contains(&dest) {
                options.push(dest);
            }
        }
        options
    }
}

/// The reference nine-room mansion.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mansion;

impl Mansion {
    /// Create the reference board.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Topology for Mansion {
    fn adjacent_rooms(&self, room: Room) -> &[Room] {
        use Room::*;
        match room {
            Study => &[Hall, Library],
            Hall => &[Study, Lounge, DiningRoom],
            Lounge => &[Hall, Conservatory],
            Library => &[Study, Hall, BilliardRoom],
            BilliardRoom => &[Library, DiningRoom, Ballroom],
            DiningRoom => &[BilliardRoom, Hall, Kitchen],
            Conservatory => &[Lounge, Ballroom],
            Ballroom => &[Conservatory, BilliardRoom, Kitchen],
            Kitchen => &[DiningRoom, Ballroom],
        }
    }

    fn secret_passage(&self, room: Room) -> Option<Room> {
        match room {
            Room::Study => Some(Room::Kitchen),
            Room::Kitchen => Some(Room::Study),
            Room::Lounge => Some(Room::Conservatory),
            Room::Conservatory => Some(Room::Lounge),
            _ => None,
        }
    }

    fn start_position(&self, character: Character) -> Room {
        match character {
            Character::MissScarlett => Room::Hall,
            Character::ColonelMustard => Room::Lounge,
            Character::MrsWhite => Room::Ballroom,
            Character::ReverendGreen => Room::Conservatory,
            Character::MrsPeacock => Room::Library,
            Character::ProfessorPlum => Room::Study,
        }
    }

    fn has_room(&self, _room: Room) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_passages_are_symmetric() {
        let board = Mansion::new();
        for room in Room::ALL {
            if let Some(dest) = board.secret_passage(room) {
                assert_eq!(board.secret_passage(dest), Some(room));
            }
        }
    }

    #[test]
    fn test_every_room_has_exits() {
        let board = Mansion::new();
        for room in Room::ALL {
            assert!(!board.adjacent_rooms(room).is_empty(), "{room} has no exits");
            assert!(!board.adjacent_rooms(room).contains(&room));
        }
    }

    #[test]
    fn test_move_options_append_passage() {
        let board = Mansion::new();
        assert_eq!(
            board.move_options(Room::Study),
            vec![Room::Hall, Room::Library, Room::Kitchen]
        );
        assert_eq!(
            board.move_options(Room::Hall),
            vec![Room::Study, Room::Lounge, Room::DiningRoom]
        );
    }

    #[test]
    fn test_start_positions() {
        let board = Mansion::new();
        assert_eq!(board.start_position(Character::ProfessorPlum), Room::Study);
        assert_eq!(board.start_position(Character::MissScarlett), Room::Hall);
    }
}

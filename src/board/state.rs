//! Token positions.
//!
//! Every character and every weapon token is always in exactly one room.
//! Positions change when a player moves and when a suggestion drags the
//! named character and weapon into the suggester's room.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::topology::Topology;
use crate::cards::{Character, Room, Weapon};
use crate::core::{RandomExt, RandomSource};

/// A movable piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    Character(Character),
    Weapon(Weapon),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Character(c) => write!(f, "{c}"),
            Token::Weapon(w) => write!(f, "the {w}"),
        }
    }
}

impl From<Character> for Token {
    fn from(c: Character) -> Self {
        Token::Character(c)
    }
}

impl From<Weapon> for Token {
    fn from(w: Weapon) -> Self {
        Token::Weapon(w)
    }
}

/// Where every token currently is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    characters: FxHashMap<Character, Room>,
    weapons: FxHashMap<Weapon, Room>,
}

impl BoardState {
    /// Initial layout: characters at their topology start rooms, weapons in
    /// distinct rooms picked by shuffling the room list.
    pub fn initial(topology: &dyn Topology, rng: &mut dyn RandomSource) -> Self {
        let characters = Character::ALL
            .into_iter()
            .map(|c| (c, topology.start_position(c)))
            .collect();

        let mut rooms = Room::ALL;
        rng.shuffle(&mut rooms);
        let weapons = Weapon::ALL.into_iter().zip(rooms).collect();

        Self {
            characters,
            weapons,
        }
    }

    /// Move a token, returning the room it left.
    pub fn move_token(&mut self, token: Token, room: Room) -> Room {
        let previous = match token {
            Token::Character(c) => self.characters.insert(c, room),
            Token::Weapon(w) => self.weapons.insert(w, room),
        };
        debug!(%token, %room, "Token moved");
        previous.unwrap_or(room)
    }

    /// Current room of a token.
    #[must_use]
    pub fn location(&self, token: Token) -> Room {
        match token {
            Token::Character(c) => self.character_room(c),
            Token::Weapon(w) => self.weapon_room(w),
        }
    }

    /// Current room of a character token.
    #[must_use]
    pub fn character_room(&self, character: Character) -> Room {
        self.characters[&character]
    }

    /// Current room of a weapon token.
    #[must_use]
    pub fn weapon_room(&self, weapon: Weapon) -> Room {
        self.weapons[&weapon]
    }

    /// All tokens currently in `room`, characters first, in canonical order.
    #[must_use]
    pub fn tokens_in(&self, room: Room) -> Vec<Token> {
        let characters = Character::ALL
            .into_iter()
            .filter(|c| self.characters[c] == room)
            .map(Token::Character);
        let weapons = Weapon::ALL
            .into_iter()
            .filter(|w| self.weapons[w] == room)
            .map(Token::Weapon);
        characters.chain(weapons).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mansion;
    use crate::core::GameRng;
    use std::collections::HashSet;

    fn board() -> BoardState {
        BoardState::initial(&Mansion::new(), &mut GameRng::new(42))
    }

    #[test]
    fn test_initial_positions() {
        let board = board();

        assert_eq!(board.character_room(Character::ProfessorPlum), Room::Study);
        assert_eq!(board.character_room(Character::MrsWhite), Room::Ballroom);

        let weapon_rooms: HashSet<_> = Weapon::ALL.iter().map(|&w| board.weapon_room(w)).collect();
        assert_eq!(weapon_rooms.len(), Weapon::ALL.len(), "weapons start in distinct rooms");
    }

    #[test]
    fn test_token_movement() {
        let mut board = board();

        let from = board.move_token(Character::MissScarlett.into(), Room::Library);
        assert_eq!(from, Room::Hall);
        assert_eq!(board.location(Character::MissScarlett.into()), Room::Library);

        board.move_token(Weapon::Rope.into(), Room::Ballroom);
        assert_eq!(board.location(Weapon::Rope.into()), Room::Ballroom);
    }

    #[test]
    fn test_tokens_in_room() {
        let mut board = board();
        board.move_token(Weapon::Dagger.into(), Room::Study);

        let tokens = board.tokens_in(Room::Study);
        assert_eq!(tokens.first(), Some(&Token::Character(Character::ProfessorPlum)));
        assert!(tokens.contains(&Token::Weapon(Weapon::Dagger)));
    }
}

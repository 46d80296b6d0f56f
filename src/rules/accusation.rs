//! Judging accusations against the solution.

use serde::{Deserialize, Serialize};

use crate::cards::Scenario;
use crate::core::PlayerId;

/// Category-by-category comparison of an accusation with the solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub character: bool,
    pub weapon: bool,
    pub room: bool,
}

impl Verdict {
    /// Compare `accusation` with `solution`.
    #[must_use]
    pub fn judge(solution: &Scenario, accusation: &Scenario) -> Self {
        Self {
            character: solution.character == accusation.character,
            weapon: solution.weapon == accusation.weapon,
            room: solution.room == accusation.room,
        }
    }

    /// All three categories match.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.character && self.weapon && self.room
    }
}

/// What an accusation did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccusationOutcome {
    /// The accuser, when the accusation was correct.
    pub winner: Option<PlayerId>,
    /// True when the accusation ended the game.
    pub game_over: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Character, Room, Weapon};

    #[test]
    fn test_judge() {
        let solution = Scenario::new(Character::MissScarlett, Weapon::Dagger, Room::Library);

        assert!(Verdict::judge(&solution, &solution).is_correct());

        let wrong = Scenario::new(Character::MissScarlett, Weapon::Dagger, Room::Study);
        let verdict = Verdict::judge(&solution, &wrong);
        assert!(!verdict.is_correct());
        assert!(verdict.character && verdict.weapon && !verdict.room);
    }
}

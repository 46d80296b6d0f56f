//! Computer-controlled seats.

use tracing::debug;

use super::controller::{Controller, ControllerKind, TurnView};
use crate::board::Topology;
use crate::cards::{Card, Character, Room, Scenario, Weapon};
use crate::core::{PlayerId, RandomExt, RandomSource};
use crate::deduction::ClueSheet;
use crate::rules::{Refutation, Suggestion};

/// A seat played by the deduction engine.
#[derive(Clone, Debug)]
pub struct ComputerController {
    sheet: ClueSheet,
}

impl ComputerController {
    /// Build the controller once the seat's hand is known.
    #[must_use]
    pub fn new(me: PlayerId, hand: &[Card]) -> Self {
        debug!(%me, cards = hand.len(), "Computer player initialized");
        Self {
            sheet: ClueSheet::new(me, hand),
        }
    }

    /// Read-only access to the clue sheet.
    #[must_use]
    pub fn sheet(&self) -> &ClueSheet {
        &self.sheet
    }
}

impl Controller for ComputerController {
    fn kind(&self) -> ControllerKind {
        ControllerKind::Computer
    }

    fn decide_accusation(
        &mut self,
        _view: &TurnView<'_>,
        _rng: &mut dyn RandomSource,
    ) -> Option<Scenario> {
        self.sheet.can_accuse()
    }

    /// Prefer rooms that could still be the solution: a secret passage into
    /// one first, then a neighbouring one, then any neighbour.
    fn decide_move(
        &mut self,
        view: &TurnView<'_>,
        _options: &[Room],
        rng: &mut dyn RandomSource,
    ) -> Option<Room> {
        if let Some(dest) = view.topology.secret_passage(view.room) {
            if self.sheet.is_possible(Card::Room(dest)) {
                debug!(me = %view.me, %dest, "Taking secret passage");
                return Some(dest);
            }
        }

        let neighbours = view.topology.adjacent_rooms(view.room);
        let strategic: Vec<Room> = neighbours
            .iter()
            .copied()
            .filter(|&room| self.sheet.is_possible(Card::Room(room)))
            .collect();

        let dest = match rng.choose(&strategic) {
            Some(&room) => room,
            None => *rng.choose(neighbours)?,
        };
        debug!(me = %view.me, %dest, strategic = !strategic.is_empty(), "Moving");
        Some(dest)
    }

    fn decide_suggestion(&mut self, view: &TurnView<'_>, rng: &mut dyn RandomSource) -> Scenario {
        self.sheet
            .get_suggestion(view.room, rng)
            .unwrap_or_else(|| {
                let character = *rng.choose(&Character::ALL).unwrap_or(&view.character);
                let weapon = *rng.choose(&Weapon::ALL).unwrap_or(&Weapon::ALL[0]);
                Scenario::new(character, weapon, view.room)
            })
    }

    /// Show the first matching card; no strategic withholding.
    fn choose_card_to_show(&mut self, _suggestion: &Suggestion, matching: &[Card]) -> Card {
        matching[0]
    }

    fn update_knowledge(&mut self, suggestion: &Suggestion, refutation: &Refutation) {
        self.sheet
            .process_suggestion(suggestion, refutation.refuter, refutation.shown);
    }

    fn clue_sheet(&self) -> Option<&ClueSheet> {
        Some(&self.sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mansion;
    use crate::core::GameRng;
    use crate::deduction::Holder;

    fn view(room: Room, topology: &Mansion) -> TurnView<'_> {
        TurnView {
            me: PlayerId::new(0),
            character: Character::MissScarlett,
            room,
            hand: &[],
            topology,
        }
    }

    #[test]
    fn test_takes_passage_into_possible_room() {
        let board = Mansion::new();
        let mut ai = ComputerController::new(PlayerId::new(0), &[]);
        let mut rng = GameRng::new(1);

        let dest = ai.decide_move(&view(Room::Study, &board), &[], &mut rng);
        assert_eq!(dest, Some(Room::Kitchen));
    }

    #[test]
    fn test_skips_passage_into_eliminated_room() {
        let board = Mansion::new();
        let mut ai = ComputerController::new(PlayerId::new(0), &[Card::Room(Room::Kitchen)]);
        let mut rng = GameRng::new(1);

        for _ in 0..10 {
            let dest = ai.decide_move(&view(Room::Study, &board), &[], &mut rng);
            assert!(matches!(dest, Some(Room::Hall) | Some(Room::Library)));
        }
    }

    #[test]
    fn test_prefers_possible_neighbours() {
        let board = Mansion::new();
        // Hall neighbours: Study, Lounge, Dining Room
        let hand = [Card::Room(Room::Study), Card::Room(Room::Lounge)];
        let mut ai = ComputerController::new(PlayerId::new(0), &hand);
        let mut rng = GameRng::new(9);

        for _ in 0..10 {
            let dest = ai.decide_move(&view(Room::Hall, &board), &[], &mut rng);
            assert_eq!(dest, Some(Room::DiningRoom));
        }
    }

    #[test]
    fn test_falls_back_to_any_neighbour() {
        let board = Mansion::new();
        let hand = [
            Card::Room(Room::Study),
            Card::Room(Room::Lounge),
            Card::Room(Room::DiningRoom),
        ];
        let mut ai = ComputerController::new(PlayerId::new(0), &hand);
        let mut rng = GameRng::new(9);

        let dest = ai.decide_move(&view(Room::Hall, &board), &[], &mut rng).unwrap();
        assert!(board_neighbours(&board, Room::Hall).contains(&dest));
    }

    fn board_neighbours(board: &Mansion, room: Room) -> Vec<Room> {
        board.adjacent_rooms(room).to_vec()
    }

    #[test]
    fn test_shows_first_matching_card() {
        let mut ai = ComputerController::new(PlayerId::new(1), &[]);
        let suggestion = Suggestion::new(
            PlayerId::new(0),
            Scenario::new(Character::MrsWhite, Weapon::Rope, Room::Hall),
        );
        let matching = [Card::Weapon(Weapon::Rope), Card::Room(Room::Hall)];

        assert_eq!(ai.choose_card_to_show(&suggestion, &matching), matching[0]);
    }

    #[test]
    fn test_update_knowledge_uses_shown_card() {
        let mut ai = ComputerController::new(PlayerId::new(0), &[]);
        let suggestion = Suggestion::new(
            PlayerId::new(0),
            Scenario::new(Character::MrsWhite, Weapon::Rope, Room::Hall),
        );

        ai.update_knowledge(
            &suggestion,
            &Refutation::by(PlayerId::new(2), Card::Room(Room::Hall)),
        );

        assert_eq!(
            ai.sheet().holder_of(Card::Room(Room::Hall)),
            Some(Holder::Player(PlayerId::new(2)))
        );
    }

    #[test]
    fn test_suggestion_room_is_current_room() {
        let board = Mansion::new();
        let mut ai = ComputerController::new(PlayerId::new(0), &[]);
        let mut rng = GameRng::new(5);

        let s = ai.decide_suggestion(&view(Room::Conservatory, &board), &mut rng);
        assert_eq!(s.room, Room::Conservatory);
    }
}

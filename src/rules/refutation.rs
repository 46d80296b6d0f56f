//! The refutation scan.
//!
//! Starting with the seat after the suggester and wrapping around, the first
//! player still in the game whose hand matches any suggested card must show
//! exactly one of those cards to the suggester. Players who have lost are
//! skipped even if they hold a match.

use smallvec::SmallVec;
use tracing::{debug, instrument, warn};

use super::suggestion::{Refutation, Suggestion};
use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};
use crate::players::Player;

/// Find who must refute `suggestion`, with their matching cards in hand order.
#[must_use]
pub fn find_refuter(
    players: &PlayerMap<Player>,
    suggestion: &Suggestion,
) -> Option<(PlayerId, SmallVec<[Card; 3]>)> {
    suggestion
        .suggester
        .rotation_after(players.player_count())
        .filter(|&id| !players[id].has_lost())
        .find_map(|id| {
            let matching = players[id].matching_cards(&suggestion.scenario);
            (!matching.is_empty()).then_some((id, matching))
        })
}

/// Run the scan and have the refuter pick the card to show.
///
/// A controller that answers with a card outside its matches is overruled
/// with its first match.
#[instrument(skip(players), fields(suggester = %suggestion.suggester))]
pub fn process_refutations(
    players: &mut PlayerMap<Player>,
    suggestion: &Suggestion,
) -> Refutation {
    let Some((refuter, matching)) = find_refuter(players, suggestion) else {
        debug!("No one could refute");
        return Refutation::none();
    };

    let chosen = players[refuter]
        .controller
        .choose_card_to_show(suggestion, &matching);
    let shown = if matching.contains(&chosen) {
        chosen
    } else {
        warn!(%refuter, card = %chosen, "Controller tried to show a card it cannot; using first match");
        matching[0]
    };

    debug!(%refuter, "Suggestion refuted");
    Refutation::by(refuter, shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Character, Room, Scenario, Weapon};
    use crate::players::ComputerController;

    fn table(hands: Vec<Vec<Card>>) -> PlayerMap<Player> {
        PlayerMap::from_vec(
            hands
                .into_iter()
                .enumerate()
                .map(|(i, hand)| {
                    let id = PlayerId::new(i as u8);
                    let controller = Box::new(ComputerController::new(id, &hand));
                    Player::new(id, Character::ALL[i], hand, controller)
                })
                .collect(),
        )
    }

    fn suggestion(by: u8) -> Suggestion {
        Suggestion::new(
            PlayerId::new(by),
            Scenario::new(Character::ColonelMustard, Weapon::Rope, Room::Hall),
        )
    }

    #[test]
    fn test_first_in_rotation_refutes() {
        let mut players = table(vec![
            vec![Card::Room(Room::Hall)],
            vec![],
            vec![Card::Character(Character::ColonelMustard)],
            vec![Card::Weapon(Weapon::Rope)],
        ]);

        let refutation = process_refutations(&mut players, &suggestion(1));

        assert_eq!(
            refutation,
            Refutation::by(PlayerId::new(2), Card::Character(Character::ColonelMustard))
        );
    }

    #[test]
    fn test_rotation_wraps_past_last_seat() {
        let mut players = table(vec![
            vec![Card::Room(Room::Hall)],
            vec![Card::Weapon(Weapon::Rope)],
            vec![],
        ]);

        let refutation = process_refutations(&mut players, &suggestion(2));

        assert_eq!(refutation.refuter, Some(PlayerId::new(0)));
        assert_eq!(refutation.shown, Some(Card::Room(Room::Hall)));
    }

    #[test]
    fn test_suggester_never_refutes_own_suggestion() {
        let mut players = table(vec![vec![Card::Room(Room::Hall)], vec![]]);

        let refutation = process_refutations(&mut players, &suggestion(0));
        assert_eq!(refutation, Refutation::none());
    }

    #[test]
    fn test_lost_players_are_skipped() {
        let mut players = table(vec![
            vec![],
            vec![Card::Weapon(Weapon::Rope)],
            vec![Card::Room(Room::Hall)],
        ]);
        players[PlayerId::new(1)].has_lost = true;

        let refutation = process_refutations(&mut players, &suggestion(0));

        assert_eq!(refutation.refuter, Some(PlayerId::new(2)));
    }

    #[test]
    fn test_find_refuter_reports_all_matches() {
        let players = table(vec![
            vec![],
            vec![Card::Room(Room::Hall), Card::Weapon(Weapon::Wrench), Card::Weapon(Weapon::Rope)],
        ]);

        let (id, matching) = find_refuter(&players, &suggestion(0)).unwrap();
        assert_eq!(id, PlayerId::new(1));
        assert_eq!(matching.as_slice(), &[Card::Room(Room::Hall), Card::Weapon(Weapon::Rope)]);
    }
}

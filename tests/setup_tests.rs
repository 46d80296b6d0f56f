//! Game setup verification tests.
//!
//! These tests check the deal invariants: a three-card solution that nobody
//! holds, disjoint hands, and every card accounted for.

use std::collections::HashSet;

use proptest::prelude::*;
use rust_cluedo::{
    Card, Character, Deal, GameBuilder, GameRng, NullSink, PlayerId, Room, ScriptedRng,
    SetupError, Weapon, CARD_COUNT,
};

/// The reference example: three players, solution forced through the RNG.
#[test]
fn test_forced_solution_three_players() {
    let game = GameBuilder::new()
        .computers(3)
        .sink(NullSink)
        .build_with_rng(ScriptedRng::new([0, 1, 5], 42))
        .unwrap();

    let solution = *game.solution();
    assert_eq!(solution.character, Character::MissScarlett);
    assert_eq!(solution.weapon, Weapon::Dagger);
    assert_eq!(solution.room, Room::Library);

    // 21 cards, 3 in the envelope, 18 dealt round-robin.
    let dealt: usize = game.players().values().map(|p| p.hand().len()).sum();
    assert_eq!(dealt + 3, CARD_COUNT);
    for player in game.players().values() {
        assert_eq!(player.hand().len(), 6);
        for card in solution.cards() {
            assert!(!player.hand().contains(&card), "{} holds solution card {card}", player.name());
        }
    }
}

/// Computer clue sheets start out knowing their own hand.
#[test]
fn test_clue_sheets_seeded_with_hand() {
    let game = GameBuilder::new().computers(4).sink(NullSink).build(7).unwrap();

    for player in game.players().values() {
        let sheet = player.controller().clue_sheet().unwrap();
        for &card in player.hand() {
            assert!(!sheet.is_possible(card));
        }
        for card in game.solution().cards() {
            assert!(sheet.is_possible(card));
        }
    }
}

#[test]
fn test_invalid_player_counts_refuse_to_start() {
    for count in [0, 1, 7, 8] {
        let err = GameBuilder::new().computers(count).sink(NullSink).build(1).unwrap_err();
        assert!(matches!(err, SetupError::InvalidPlayerCount { .. }), "{count}: {err}");
    }
}

/// A corrupted deal is caught before any game can use it.
#[test]
fn test_validate_rejects_bad_deals() {
    let mut deal = Deal::random(3, &mut GameRng::new(3));
    let leaked = Card::Room(deal.solution.room);
    deal.hands[1].push(leaked);
    assert_eq!(deal.validate(), Err(SetupError::SolutionCardDealt(leaked)));

    let mut deal = Deal::random(3, &mut GameRng::new(3));
    let card = deal.hands[0][0];
    deal.hands[2].push(card);
    assert_eq!(deal.validate(), Err(SetupError::DuplicateCard(card)));

    let mut deal = Deal::random(3, &mut GameRng::new(3));
    deal.hands[0].pop();
    assert!(matches!(deal.validate(), Err(SetupError::CardCountMismatch { .. })));
}

#[test]
fn test_seating_order() {
    let game = GameBuilder::new().computers(6).sink(NullSink).build(9).unwrap();

    let names: Vec<_> = game.players().values().map(|p| p.name().to_string()).collect();
    assert_eq!(names[0], "Player 1");
    assert_eq!(names[5], "Player 6");
    assert_eq!(game.players()[PlayerId::new(5)].character(), Character::ProfessorPlum);
    assert_eq!(game.current_player(), PlayerId::new(0));
}

proptest! {
    #[test]
    fn prop_deal_partitions_the_universe(seed in any::<u64>(), players in 2usize..=6) {
        let deal = Deal::random(players, &mut GameRng::new(seed));
        prop_assert!(deal.validate().is_ok());

        let sizes: Vec<usize> = deal.hands.iter().map(Vec::len).collect();
        let max = *sizes.iter().max().unwrap();
        let min = *sizes.iter().min().unwrap();
        prop_assert!(max - min <= 1);

        let mut seen: HashSet<Card> = deal.solution.cards().into_iter().collect();
        for card in deal.hands.iter().flatten() {
            prop_assert!(seen.insert(*card));
        }
        prop_assert_eq!(seen.len(), CARD_COUNT);
    }

    #[test]
    fn prop_same_seed_same_table(seed in any::<u64>()) {
        let table = || {
            let game = GameBuilder::new().computers(3).sink(NullSink).build(seed).unwrap();
            let hands: Vec<Vec<Card>> = game.players().values().map(|p| p.hand().to_vec()).collect();
            let weapons: Vec<Room> = Weapon::ALL.iter().map(|&w| game.board().weapon_room(w)).collect();
            (*game.solution(), hands, weapons)
        };
        prop_assert_eq!(table(), table());
    }
}

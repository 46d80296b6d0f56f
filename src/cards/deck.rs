//! Solution draw and dealing.
//!
//! Setup draws one card per category into the hidden solution, shuffles what
//! is left and deals it round-robin in seat order. [`Deal::validate`] checks
//! the result against the card universe before any game is allowed to start.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::card::{Card, CARD_COUNT};
use super::scenario::Scenario;
use super::token::{Character, Room, Weapon};
use crate::core::{RandomExt, RandomSource, SetupError};

/// An ordered pile of cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The full universe in canonical order.
    #[must_use]
    pub fn full() -> Self {
        Self {
            cards: Card::universe().collect(),
        }
    }

    /// Draw the solution: one uniformly random card per category, removed
    /// from the deck. Draw order is character, weapon, room.
    pub fn take_solution(&mut self, rng: &mut dyn RandomSource) -> Scenario {
        let character = *rng.choose(&Character::ALL).unwrap_or(&Character::ALL[0]);
        let weapon = *rng.choose(&Weapon::ALL).unwrap_or(&Weapon::ALL[0]);
        let room = *rng.choose(&Room::ALL).unwrap_or(&Room::ALL[0]);
        let solution = Scenario::new(character, weapon, room);

        self.cards.retain(|&card| !solution.contains(card));
        solution
    }

    /// Shuffle the deck in place.
    pub fn shuffle(&mut self, rng: &mut dyn RandomSource) {
        rng.shuffle(&mut self.cards);
    }

    /// Deal every card round-robin, starting with the first seat.
    ///
    /// Earlier seats receive one extra card when the deck does not divide
    /// evenly.
    #[must_use]
    pub fn deal_round_robin(self, player_count: usize) -> Vec<Vec<Card>> {
        let mut hands = vec![Vec::new(); player_count];
        for (i, card) in self.cards.into_iter().enumerate() {
            hands[i % player_count].push(card);
        }
        hands
    }

    /// Number of cards left in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// A hidden solution and the hands dealt from what remained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    pub solution: Scenario,
    pub hands: Vec<Vec<Card>>,
}

impl Deal {
    /// Draw a solution, shuffle and deal to `player_count` seats.
    pub fn random(player_count: usize, rng: &mut dyn RandomSource) -> Self {
        let mut deck = Deck::full();
        let solution = deck.take_solution(rng);
        deck.shuffle(rng);
        debug!(cards = deck.len(), player_count, "Dealing");
        let hands = deck.deal_round_robin(player_count);
        Self { solution, hands }
    }

    /// Check the deal against the card universe.
    ///
    /// Hands must be pairwise disjoint, must not hold any solution card, and
    /// together with the solution must account for every card exactly once.
    pub fn validate(&self) -> Result<(), SetupError> {
        let solution_cards = self.solution.cards();
        let mut seen: FxHashSet<Card> = solution_cards.iter().copied().collect();

        for &card in self.hands.iter().flatten() {
            if solution_cards.contains(&card) {
                return Err(SetupError::SolutionCardDealt(card));
            }
            if !seen.insert(card) {
                return Err(SetupError::DuplicateCard(card));
            }
        }

        if seen.len() != CARD_COUNT {
            return Err(SetupError::CardCountMismatch {
                expected: CARD_COUNT,
                actual: seen.len(),
            });
        }
        Ok(())
    }

    /// Total number of cards in hands.
    #[must_use]
    pub fn dealt_count(&self) -> usize {
        self.hands.iter().map(Vec::len).sum()
    }
}

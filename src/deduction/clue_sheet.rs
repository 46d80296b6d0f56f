//! A computer player's clue sheet.
//!
//! The sheet keeps one possibility set per category and a map from
//! eliminated cards to whoever is known to hold them. Inference is purely
//! eliminative: the only hard eliminations are the player's own hand and
//! cards shown directly to the player.
//!
//! Two weaker signals are recorded but never turned into eliminations:
//!
//! - a refutation the player did not see is kept as a [`RefutationNote`]
//!   ("that player holds at least one of these three cards");
//! - an unrefuted suggestion only bumps an advisory counter.
//!
//! ## Invariants
//!
//! - A card is either still possible or has a recorded holder, never both.
//! - Every card in the player's own hand is eliminated with holder
//!   [`Holder::Myself`].

use im::{OrdSet, Vector};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, Character, Room, Scenario, Weapon};
use crate::core::{PlayerId, RandomExt, RandomSource};
use crate::rules::Suggestion;

/// Who is known to hold an eliminated card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Holder {
    /// The clue sheet's own player.
    Myself,
    /// Another seat.
    Player(PlayerId),
}

/// `refuter` holds at least one of `cards`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefutationNote {
    pub refuter: PlayerId,
    pub cards: [Card; 3],
}

/// Knowledge base and decision helper for one computer player.
#[derive(Clone, Debug)]
pub struct ClueSheet {
    me: PlayerId,
    possible_characters: OrdSet<Character>,
    possible_weapons: OrdSet<Weapon>,
    possible_rooms: OrdSet<Room>,
    known_holders: FxHashMap<Card, Holder>,
    notes: Vector<RefutationNote>,
    unrefuted: u32,
}

impl ClueSheet {
    /// Start from the full universe, then eliminate the player's own hand.
    #[must_use]
    pub fn new(me: PlayerId, hand: &[Card]) -> Self {
        let mut sheet = Self {
            me,
            possible_characters: Character::ALL.into_iter().collect(),
            possible_weapons: Weapon::ALL.into_iter().collect(),
            possible_rooms: Room::ALL.into_iter().collect(),
            known_holders: FxHashMap::default(),
            notes: Vector::new(),
            unrefuted: 0,
        };
        for &card in hand {
            sheet.eliminate(card, Holder::Myself);
        }
        sheet
    }

    /// Remove `card` from its possibility set and record who holds it.
    ///
    /// Eliminating an already-eliminated card only overwrites the holder.
    /// Returns `true` if the card was still possible.
    pub fn eliminate(&mut self, card: Card, holder: Holder) -> bool {
        self.known_holders.insert(card, holder);
        match card {
            Card::Character(c) => self.possible_characters.remove(&c).is_some(),
            Card::Weapon(w) => self.possible_weapons.remove(&w).is_some(),
            Card::Room(r) => self.possible_rooms.remove(&r).is_some(),
        }
    }

    /// Fold the outcome of a suggestion into the sheet.
    ///
    /// `shown` must only be `Some` for the suggester.
    pub fn process_suggestion(
        &mut self,
        suggestion: &Suggestion,
        refuter: Option<PlayerId>,
        shown: Option<Card>,
    ) {
        match (refuter, shown) {
            (Some(refuter), Some(card)) => {
                if suggestion.suggester == self.me {
                    debug!(me = %self.me, %card, %refuter, "Shown a card, eliminating it");
                    self.eliminate(card, Holder::Player(refuter));
                }
            }
            (Some(refuter), None) => {
                let cards = suggestion.cards();
                debug!(
                    me = %self.me,
                    %refuter,
                    character = %cards[0],
                    weapon = %cards[1],
                    room = %cards[2],
                    "Refuted out of sight, holder has one of these"
                );
                self.notes.push_back(RefutationNote { refuter, cards });
            }
            (None, _) => {
                debug!(me = %self.me, scenario = %suggestion.scenario, "Nobody refuted");
                self.unrefuted += 1;
            }
        }
    }

    /// The solution, once every category is down to a single candidate.
    #[must_use]
    pub fn can_accuse(&self) -> Option<Scenario> {
        if self.possible_characters.len() != 1
            || self.possible_weapons.len() != 1
            || self.possible_rooms.len() != 1
        {
            return None;
        }
        Some(Scenario::new(
            *self.possible_characters.iter().next()?,
            *self.possible_weapons.iter().next()?,
            *self.possible_rooms.iter().next()?,
        ))
    }

    /// Pick a suggestion for `current_room`.
    ///
    /// Character and weapon come uniformly from the possibility sets. If
    /// either set is empty, a random card not yet attributed to anyone is
    /// taken from characters and weapons, and the other slot is filled from
    /// its possibility set (or the whole category if that is empty too).
    /// Returns `None` only when every character and weapon is attributed.
    pub fn get_suggestion(
        &self,
        current_room: Room,
        rng: &mut dyn RandomSource,
    ) -> Option<Scenario> {
        let characters: Vec<Character> = self.possible_characters.iter().copied().collect();
        let weapons: Vec<Weapon> = self.possible_weapons.iter().copied().collect();

        if !characters.is_empty() && !weapons.is_empty() {
            let character = *rng.choose(&characters)?;
            let weapon = *rng.choose(&weapons)?;
            return Some(Scenario::new(character, weapon, current_room));
        }

        let unknowns: Vec<Card> = Character::ALL
            .into_iter()
            .map(Card::Character)
            .chain(Weapon::ALL.into_iter().map(Card::Weapon))
            .filter(|card| !self.known_holders.contains_key(card))
            .collect();

        let scenario = match *rng.choose(&unknowns)? {
            Card::Character(character) => {
                let pool = if weapons.is_empty() { &Weapon::ALL[..] } else { &weapons[..] };
                Scenario::new(character, *rng.choose(pool)?, current_room)
            }
            Card::Weapon(weapon) => {
                let pool = if characters.is_empty() { &Character::ALL[..] } else { &characters[..] };
                Scenario::new(*rng.choose(pool)?, weapon, current_room)
            }
            Card::Room(_) => return None,
        };
        debug!(me = %self.me, %scenario, "Falling back to an unattributed card");
        Some(scenario)
    }

    /// Is `card` still a candidate for the solution?
    #[must_use]
    pub fn is_possible(&self, card: Card) -> bool {
        match card {
            Card::Character(c) => self.possible_characters.contains(&c),
            Card::Weapon(w) => self.possible_weapons.contains(&w),
            Card::Room(r) => self.possible_rooms.contains(&r),
        }
    }

    /// Who is known to hold `card`, if it has been eliminated.
    #[must_use]
    pub fn holder_of(&self, card: Card) -> Option<Holder> {
        self.known_holders.get(&card).copied()
    }

    /// Remaining candidate characters, in canonical order.
    pub fn possible_characters(&self) -> impl Iterator<Item = Character> + '_ {
        self.possible_characters.iter().copied()
    }

    /// Remaining candidate weapons, in canonical order.
    pub fn possible_weapons(&self) -> impl Iterator<Item = Weapon> + '_ {
        self.possible_weapons.iter().copied()
    }

    /// Remaining candidate rooms, in canonical order.
    pub fn possible_rooms(&self) -> impl Iterator<Item = Room> + '_ {
        self.possible_rooms.iter().copied()
    }

    /// Refutations this player saw happen but did not see the card for.
    #[must_use]
    pub fn refutation_notes(&self) -> &Vector<RefutationNote> {
        &self.notes
    }

    /// How many suggestions went unrefuted.
    #[must_use]
    pub fn unrefuted_count(&self) -> u32 {
        self.unrefuted
    }
}

//! Narrative events.
//!
//! The orchestrator reports everything that happens at the table as a
//! [`GameEvent`] to an [`EventSink`]. Sinks only observe: nothing they do
//! feeds back into game state.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::Token;
use crate::cards::{Card, Character, Room, Scenario};
use crate::core::PlayerId;
use crate::rules::Verdict;

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Setup finished.
    GameStarted { players: Vec<(PlayerId, Character)> },
    /// A seat's turn began.
    TurnStarted { player: PlayerId, turn: u32, room: Room },
    /// A seat that has lost was passed over.
    TurnSkipped { player: PlayerId },
    /// A seat moved its token.
    Moved {
        player: PlayerId,
        from: Room,
        to: Room,
        secret_passage: bool,
    },
    /// A seat had nowhere to go.
    StayedPut { player: PlayerId, room: Room },
    /// A suggestion was announced.
    SuggestionMade { player: PlayerId, scenario: Scenario },
    /// A token was dragged into the suggestion room.
    TokenMoved { token: Token, from: Room, to: Room },
    /// Somebody refuted; the card is not public.
    Refuted { suggester: PlayerId, refuter: PlayerId },
    /// The card behind a refutation. Private to `suggester`.
    CardShown {
        suggester: PlayerId,
        refuter: PlayerId,
        card: Card,
    },
    /// Nobody could refute.
    NotRefuted { suggester: PlayerId },
    /// An accusation was announced.
    AccusationMade { player: PlayerId, scenario: Scenario },
    /// The accusation was wrong; the accuser is out.
    AccusationFailed { player: PlayerId, verdict: Verdict },
    /// The accusation was right.
    Won { player: PlayerId, solution: Scenario },
    /// Every player accused wrongly.
    HouseWins { solution: Scenario },
}

impl GameEvent {
    /// Is this event only meant for one player's eyes?
    #[must_use]
    pub fn private_to(&self) -> Option<PlayerId> {
        match self {
            GameEvent::CardShown { suggester, .. } => Some(*suggester),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted { players } => {
                write!(f, "The game begins with {} players", players.len())
            }
            GameEvent::TurnStarted { player, turn, room } => {
                write!(f, "Turn {turn}: {player} is in the {room}")
            }
            GameEvent::TurnSkipped { player } => write!(f, "{player} is out and skips the turn"),
            GameEvent::Moved {
                player,
                to,
                secret_passage: true,
                ..
            } => write!(f, "{player} takes the secret passage to the {to}"),
            GameEvent::Moved { player, to, .. } => write!(f, "{player} moves to the {to}"),
            GameEvent::StayedPut { player, room } => {
                write!(f, "{player} has no exits and stays in the {room}")
            }
            GameEvent::SuggestionMade { player, scenario } => {
                write!(f, "{player} suggests it was {scenario}")
            }
            GameEvent::TokenMoved { token, to, .. } => {
                write!(f, "{token} is moved to the {to}")
            }
            GameEvent::Refuted { suggester, refuter } => {
                write!(f, "{refuter} shows {suggester} a card")
            }
            GameEvent::CardShown { refuter, card, .. } => {
                write!(f, "{refuter} shows you: {card}")
            }
            GameEvent::NotRefuted { suggester } => {
                write!(f, "Nobody can refute {suggester}'s suggestion")
            }
            GameEvent::AccusationMade { player, scenario } => {
                write!(f, "{player} accuses {scenario}")
            }
            GameEvent::AccusationFailed { player, .. } => {
                write!(f, "{player} is wrong and is out of the game")
            }
            GameEvent::Won { player, solution } => {
                write!(f, "{player} wins! It was {solution}")
            }
            GameEvent::HouseWins { solution } => {
                write!(f, "Everyone is out. The house wins; it was {solution}")
            }
        }
    }
}

/// Receives narrative events.
pub trait EventSink {
    /// Called once per event, in order.
    fn notify(&mut self, event: &GameEvent);
}

/// Default sink: logs every public event at `info` and private ones at `debug`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn notify(&mut self, event: &GameEvent) {
        match event.private_to() {
            Some(player) => tracing::debug!(%player, "{event}"),
            None => info!("{event}"),
        }
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: &GameEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Weapon;

    #[test]
    fn test_only_card_shown_is_private() {
        let shown = GameEvent::CardShown {
            suggester: PlayerId::new(0),
            refuter: PlayerId::new(1),
            card: Card::Weapon(Weapon::Rope),
        };
        assert_eq!(shown.private_to(), Some(PlayerId::new(0)));

        let refuted = GameEvent::Refuted {
            suggester: PlayerId::new(0),
            refuter: PlayerId::new(1),
        };
        assert_eq!(refuted.private_to(), None);
    }

    #[test]
    fn test_display() {
        let event = GameEvent::Moved {
            player: PlayerId::new(0),
            from: Room::Study,
            to: Room::Kitchen,
            secret_passage: true,
        };
        assert_eq!(event.to_string(), "Player 1 takes the secret passage to the Kitchen");
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::SuggestionMade {
            player: PlayerId::new(2),
            scenario: Scenario::new(
                crate::cards::Character::MrsWhite,
                Weapon::Candlestick,
                Room::Lounge,
            ),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}

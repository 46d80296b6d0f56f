//! The per-turn state machine.
//!
//! ```text
//! AwaitMoveOrAccuse ──► Move ──► Suggest ──► End
//!        │                 └───────────────► End   (stayed put)
//!        └──────────► Accuse ──► End        (wrong)
//!                            └──► GameOver  (right)
//! ```
//!
//! A seat that has lost skips the whole machine. Computers accuse as soon as
//! their clue sheet allows, which pre-empts movement for that turn.

use tracing::{info_span, trace};

use super::events::GameEvent;
use super::orchestrator::Game;
use crate::cards::{Room, Scenario};
use crate::core::{GameError, PlayerId};
use crate::rules::{AccusationOutcome, GameResult, Refutation, Suggestion};

/// Where a turn currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitMoveOrAccuse,
    Move,
    Suggest,
    Accuse(Scenario),
    End,
    GameOver,
}

/// What the acting seat did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    /// The seat has lost and only refutes now.
    Skipped,
    /// Moved (or stayed put) and possibly suggested.
    Moved {
        to: Option<Room>,
        suggestion: Option<Suggestion>,
        /// Full refutation, shown card included.
        refutation: Refutation,
    },
    Accused {
        accusation: Scenario,
        outcome: AccusationOutcome,
    },
}

/// Summary of one call to [`Game::take_turn`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub player: PlayerId,
    pub turn: u32,
    pub action: TurnAction,
    /// Set once the game has ended, including by a house win after this turn.
    pub result: Option<GameResult>,
}

impl Game {
    /// Play the current seat's turn and pass play to the next seat.
    pub fn take_turn(&mut self) -> Result<TurnReport, GameError> {
        self.ensure_running()?;
        let player = self.current;
        self.turn_number += 1;
        let turn = self.turn_number;

        let span = info_span!("turn", turn, %player);
        let _guard = span.enter();

        let action = if self.players()[player].has_lost() {
            self.emit(GameEvent::TurnSkipped { player });
            TurnAction::Skipped
        } else {
            let room = self.board().character_room(self.players()[player].character());
            self.emit(GameEvent::TurnStarted { player, turn, room });
            self.play_turn(player)?
        };

        self.check_house_win();
        self.current = player.next(self.players().player_count());

        Ok(TurnReport {
            player,
            turn,
            action,
            result: self.result(),
        })
    }

    /// Take turns until the game ends.
    ///
    /// Stops with [`GameError::TurnLimitReached`] if the configured cap is hit first.
    pub fn run(&mut self) -> Result<GameResult, GameError> {
        loop {
            if let Some(result) = self.result() {
                return Ok(result);
            }
            if let Some(limit) = self.config().max_turns {
                if self.turn_number >= limit {
                    return Err(GameError::TurnLimitReached(limit));
                }
            }
            self.take_turn()?;
        }
    }

    fn play_turn(&mut self, player: PlayerId) -> Result<TurnAction, GameError> {
        let mut phase = TurnPhase::AwaitMoveOrAccuse;
        let mut to = None;
        let mut suggestion = None;
        let mut refutation = Refutation::none();
        let mut accused = None;

        loop {
            trace!(?phase);
            phase = match phase {
                TurnPhase::AwaitMoveOrAccuse => {
                    self.pace(player);
                    let accusation = self.with_controller(player, |controller, view, rng| {
                        controller.decide_accusation(view, rng)
                    });
                    match accusation {
                        Some(scenario) => TurnPhase::Accuse(scenario),
                        None => TurnPhase::Move,
                    }
                }
                TurnPhase::Move => {
                    to = self.move_player(player)?;
                    match to {
                        Some(room) if self.topology().has_room(room) => TurnPhase::Suggest,
                        _ => TurnPhase::End,
                    }
                }
                TurnPhase::Suggest => {
                    self.pace(player);
                    if let Some(made) = self.make_suggestion(player)? {
                        refutation = self.process_refutations(&made)?;
                        self.broadcast_knowledge(&made, &refutation)?;
                        suggestion = Some(made);
                    }
                    TurnPhase::End
                }
                TurnPhase::Accuse(scenario) => {
                    let outcome = self.handle_accusation(player, &scenario)?;
                    accused = Some((scenario, outcome));
                    if outcome.game_over {
                        TurnPhase::GameOver
                    } else {
                        TurnPhase::End
                    }
                }
                TurnPhase::End | TurnPhase::GameOver => break,
            };
        }

        Ok(match accused {
            Some((accusation, outcome)) => TurnAction::Accused {
                accusation,
                outcome,
            },
            None => TurnAction::Moved {
                to,
                suggestion,
                refutation,
            },
        })
    }
}

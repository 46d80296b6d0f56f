//! The game orchestrator.
//!
//! `Game` owns everything hidden or shared: the solution, the board, every
//! seat and the random source. It is the only place that mutates token
//! positions and `has_lost` flags. Each phase of a turn is exposed as its own
//! method so hosts and tests can drive a game step by step; [`Game::take_turn`]
//! strings them together.

use std::time::Duration;

use im::Vector;
use tracing::{debug, info, warn};

use super::events::{EventSink, GameEvent};
use crate::board::{BoardState, Token, Topology};
use crate::cards::{Room, Scenario};
use crate::core::{GameConfig, GameError, PlayerId, PlayerMap, RandomSource};
use crate::players::{Controller, ControllerKind, Player, TurnView};
use crate::rules::{self, AccusationOutcome, GameResult, Refutation, Suggestion, Verdict};

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished(GameResult),
}

/// A game in progress.
pub struct Game {
    config: GameConfig,
    topology: Box<dyn Topology>,
    rng: Box<dyn RandomSource>,
    sink: Box<dyn EventSink>,
    solution: Scenario,
    players: PlayerMap<Player>,
    board: BoardState,
    pub(super) current: PlayerId,
    pub(super) turn_number: u32,
    status: GameStatus,
    history: Vector<GameEvent>,
}

impl Game {
    pub(super) fn new(
        config: GameConfig,
        topology: Box<dyn Topology>,
        rng: Box<dyn RandomSource>,
        sink: Box<dyn EventSink>,
        solution: Scenario,
        players: PlayerMap<Player>,
        board: BoardState,
    ) -> Self {
        let mut game = Self {
            config,
            topology,
            rng,
            sink,
            solution,
            players,
            board,
            current: PlayerId::new(0),
            turn_number: 0,
            status: GameStatus::InProgress,
            history: Vector::new(),
        };
        let seating = game
            .players
            .values()
            .map(|p| (p.id(), p.character()))
            .collect();
        game.emit(GameEvent::GameStarted { players: seating });
        game
    }

    // === Queries ===

    /// The hidden solution. Never handed to a controller.
    pub fn solution(&self) -> &Scenario {
        &self.solution
    }

    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn topology(&self) -> &dyn Topology {
        self.topology.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The seat whose turn is next.
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Turns taken so far, skipped turns included.
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Finished(result) => Some(result),
        }
    }

    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    /// Every event so far, private ones included.
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    /// The room a seat's character token is in.
    pub fn player_room(&self, id: PlayerId) -> Option<Room> {
        self.players
            .get(id)
            .map(|p| self.board.character_room(p.character()))
    }

    // === Turn phases ===

    /// Ask `player` where to go and move their token.
    ///
    /// Returns the room entered, or `None` if the token stayed put (no exits,
    /// the controller declined, or the seat has lost).
    pub fn move_player(&mut self, player: PlayerId) -> Result<Option<Room>, GameError> {
        self.ensure_running()?;
        if self.seat(player)?.has_lost() {
            debug!(%player, "Lost players do not move");
            return Ok(None);
        }

        let character = self.players[player].character();
        let from = self.board.character_room(character);
        let options = self.topology.move_options(from);
        let choice = self.with_controller(player, |controller, view, rng| {
            controller.decide_move(view, &options, rng)
        });

        match choice {
            Some(to) if options.contains(&to) => {
                self.board.move_token(Token::Character(character), to);
                let secret_passage = self.topology.secret_passage(from) == Some(to)
                    && !self.topology.adjacent_rooms(from).contains(&to);
                self.emit(GameEvent::Moved {
                    player,
                    from,
                    to,
                    secret_passage,
                });
                Ok(Some(to))
            }
            other => {
                if let Some(to) = other {
                    warn!(%player, %to, "Controller chose an unreachable room; staying put");
                }
                self.emit(GameEvent::StayedPut { player, room: from });
                Ok(None)
            }
        }
    }

    /// Ask `player` for a suggestion in their current room and drag the
    /// named character and weapon tokens there.
    ///
    /// Returns `None` for a seat that has lost.
    pub fn make_suggestion(&mut self, player: PlayerId) -> Result<Option<Suggestion>, GameError> {
        self.ensure_running()?;
        if self.seat(player)?.has_lost() {
            debug!(%player, "Lost players do not suggest");
            return Ok(None);
        }

        let room = self.board.character_room(self.players[player].character());
        let chosen = self.with_controller(player, |controller, view, rng| {
            controller.decide_suggestion(view, rng)
        });
        if chosen.room != room {
            warn!(%player, chosen = %chosen.room, %room, "Suggestion named another room; using the current one");
        }
        let scenario = Scenario::new(chosen.character, chosen.weapon, room);
        let suggestion = Suggestion::new(player, scenario);
        self.emit(GameEvent::SuggestionMade { player, scenario });

        for token in [Token::Character(scenario.character), Token::Weapon(scenario.weapon)] {
            let from = self.board.move_token(token, room);
            self.emit(GameEvent::TokenMoved { token, from, to: room });
        }
        Ok(Some(suggestion))
    }

    /// Find the first player after the suggester who can refute, and have
    /// them show a card.
    pub fn process_refutations(&mut self, suggestion: &Suggestion) -> Result<Refutation, GameError> {
        self.ensure_running()?;
        self.seat(suggestion.suggester)?;

        let refutation = rules::process_refutations(&mut self.players, suggestion);
        let suggester = suggestion.suggester;
        match (refutation.refuter, refutation.shown) {
            (Some(refuter), Some(card)) => {
                self.emit(GameEvent::Refuted { suggester, refuter });
                self.emit(GameEvent::CardShown {
                    suggester,
                    refuter,
                    card,
                });
            }
            _ => self.emit(GameEvent::NotRefuted { suggester }),
        }
        Ok(refutation)
    }

    /// Tell every seat how a suggestion went. Only the suggester learns
    /// which card was shown; everyone else, the refuter included, gets the
    /// public view.
    pub fn broadcast_knowledge(
        &mut self,
        suggestion: &Suggestion,
        refutation: &Refutation,
    ) -> Result<(), GameError> {
        self.seat(suggestion.suggester)?;
        let public = refutation.public_view();
        for (id, seat) in self.players.iter_mut() {
            let view = if id == suggestion.suggester {
                refutation
            } else {
                &public
            };
            seat.controller.update_knowledge(suggestion, view);
        }
        Ok(())
    }

    /// Judge an accusation. A correct one ends the game with `player` as the
    /// winner; a wrong one knocks `player` out for good but the game goes on.
    ///
    /// A seat that has already lost cannot accuse again; the call is a no-op.
    pub fn handle_accusation(
        &mut self,
        player: PlayerId,
        accusation: &Scenario,
    ) -> Result<AccusationOutcome, GameError> {
        self.ensure_running()?;
        if self.seat(player)?.has_lost() {
            debug!(%player, "Lost players cannot accuse");
            return Ok(AccusationOutcome {
                winner: None,
                game_over: false,
            });
        }

        self.emit(GameEvent::AccusationMade {
            player,
            scenario: *accusation,
        });
        let verdict = Verdict::judge(&self.solution, accusation);
        if verdict.is_correct() {
            info!(%player, "Correct accusation");
            self.status = GameStatus::Finished(GameResult::Winner(player));
            self.emit(GameEvent::Won {
                player,
                solution: self.solution,
            });
            Ok(AccusationOutcome {
                winner: Some(player),
                game_over: true,
            })
        } else {
            info!(%player, ?verdict, "Wrong accusation");
            self.players[player].has_lost = true;
            self.emit(GameEvent::AccusationFailed { player, verdict });
            Ok(AccusationOutcome {
                winner: None,
                game_over: false,
            })
        }
    }

    /// End the game if every seat has lost. Returns true if it did.
    pub fn check_house_win(&mut self) -> bool {
        if self.is_over() || !self.players.values().all(Player::has_lost) {
            return false;
        }
        info!("Every player has lost");
        self.status = GameStatus::Finished(GameResult::HouseWins);
        self.emit(GameEvent::HouseWins {
            solution: self.solution,
        });
        true
    }

    // === Internals ===

    pub(super) fn ensure_running(&self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn seat(&self, player: PlayerId) -> Result<&Player, GameError> {
        self.players
            .get(player)
            .ok_or(GameError::UnknownPlayer(player))
    }

    /// Ask the seat's computer to "think" before it decides.
    pub(super) fn pace(&self, player: PlayerId) {
        let delay = self.config.think_delay;
        if delay > Duration::ZERO && self.players[player].kind() == ControllerKind::Computer {
            std::thread::sleep(delay);
        }
    }

    /// Run `decide` against `player`'s controller with a view of their turn.
    pub(super) fn with_controller<T>(
        &mut self,
        player: PlayerId,
        decide: impl FnOnce(&mut dyn Controller, &TurnView<'_>, &mut dyn RandomSource) -> T,
    ) -> T {
        let seat = &mut self.players[player];
        let character = seat.character();
        let room = self.board.character_room(character);
        let (hand, controller) = seat.hand_and_controller();
        let view = TurnView {
            me: player,
            character,
            room,
            hand,
            topology: &*self.topology,
        };
        decide(controller, &view, &mut *self.rng)
    }

    pub(super) fn emit(&mut self, event: GameEvent) {
        self.sink.notify(&event);
        self.history.push_back(event);
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players)
            .field("board", &self.board)
            .field("current", &self.current)
            .field("turn_number", &self.turn_number)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

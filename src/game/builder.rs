//! Game setup.
//!
//! Setup draws from the random source in a fixed order: the solution
//! (character, weapon, room), the deck shuffle, then the weapon placement
//! shuffle. The same seed therefore always produces the same table.

use tracing::{debug, info};

use super::events::{EventSink, TracingSink};
use super::orchestrator::Game;
use crate::board::{BoardState, Mansion, Topology};
use crate::cards::{Character, Deal};
use crate::core::{
    GameConfig, GameRng, PlayerId, PlayerMap, RandomSource, SetupError, MAX_PLAYERS, MIN_PLAYERS,
};
use crate::players::{ComputerController, Controller, HumanController, InputProvider, Player};

/// Who sits in a seat. Controllers are created after the deal, once the
/// seat's hand is known.
pub enum Seat {
    Computer,
    Human(Box<dyn InputProvider>),
}

impl std::fmt::Debug for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Computer => f.write_str("Computer"),
            Seat::Human(_) => f.write_str("Human"),
        }
    }
}

/// Builder for creating a [`Game`].
pub struct GameBuilder {
    seats: Vec<Seat>,
    config: GameConfig,
    topology: Box<dyn Topology>,
    sink: Box<dyn EventSink>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            seats: Vec::new(),
            config: GameConfig::default(),
            topology: Box::new(Mansion::new()),
            sink: Box::new(TracingSink),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a computer-controlled seat.
    pub fn computer(mut self) -> Self {
        self.seats.push(Seat::Computer);
        self
    }

    /// Add `count` computer-controlled seats.
    pub fn computers(mut self, count: usize) -> Self {
        self.seats.extend(std::iter::repeat_with(|| Seat::Computer).take(count));
        self
    }

    /// Add a human seat fed by `input`.
    pub fn human(mut self, input: impl InputProvider + 'static) -> Self {
        self.seats.push(Seat::Human(Box::new(input)));
        self
    }

    /// Add an already-built seat.
    pub fn seat(mut self, seat: Seat) -> Self {
        self.seats.push(seat);
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Where narrative events go. Defaults to [`TracingSink`].
    pub fn sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replace the reference mansion.
    pub fn topology(mut self, topology: impl Topology + 'static) -> Self {
        self.topology = Box::new(topology);
        self
    }

    /// Build the game from a seed.
    pub fn build(self, seed: u64) -> Result<Game, SetupError> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build the game drawing every random choice from `rng`.
    pub fn build_with_rng(self, rng: impl RandomSource + 'static) -> Result<Game, SetupError> {
        let Self {
            seats,
            config,
            topology,
            sink,
        } = self;
        let mut rng: Box<dyn RandomSource> = Box::new(rng);

        let player_count = seats.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(SetupError::InvalidPlayerCount {
                count: player_count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        for character in Character::ALL {
            let room = topology.start_position(character);
            if !topology.has_room(room) {
                return Err(SetupError::StartRoomOffBoard { character, room });
            }
        }

        let deal = Deal::random(player_count, rng.as_mut());
        deal.validate()?;
        info!(player_count, "Cards dealt");
        if config.reveal_solution {
            debug!(solution = %deal.solution, "Solution drawn");
        }

        let board = BoardState::initial(topology.as_ref(), rng.as_mut());

        let Deal { solution, hands } = deal;
        let players = PlayerMap::from_vec(
            seats
                .into_iter()
                .zip(hands)
                .enumerate()
                .map(|(idx, (seat, hand))| {
                    let id = PlayerId::new(idx as u8);
                    let controller: Box<dyn Controller> = match seat {
                        Seat::Computer => Box::new(ComputerController::new(id, &hand)),
                        Seat::Human(input) => Box::new(HumanController::new(id, input)),
                    };
                    Player::new(id, Character::ALL[idx], hand, controller)
                })
                .collect(),
        );

        Ok(Game::new(config, topology, rng, sink, solution, players, board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Token;
    use crate::cards::{Card, Room, Weapon};
    use crate::core::ScriptedRng;
    use crate::game::NullSink;

    #[test]
    fn test_player_count_bounds() {
        let err = GameBuilder::new().computer().sink(NullSink).build(1).unwrap_err();
        assert_eq!(err, SetupError::InvalidPlayerCount { count: 1, min: 2, max: 6 });

        let err = GameBuilder::new().computers(7).sink(NullSink).build(1).unwrap_err();
        assert!(matches!(err, SetupError::InvalidPlayerCount { count: 7, .. }));

        for count in MIN_PLAYERS..=MAX_PLAYERS {
            let game = GameBuilder::new().computers(count).sink(NullSink).build(1).unwrap();
            assert_eq!(game.players().player_count(), count);
        }
    }

    #[test]
    fn test_forced_solution() {
        let rng = ScriptedRng::new([0, 1, 5], 7);
        let game = GameBuilder::new()
            .computers(3)
            .sink(NullSink)
            .build_with_rng(rng)
            .unwrap();

        let solution = game.solution();
        assert_eq!(solution.character, Character::MissScarlett);
        assert_eq!(solution.weapon, Weapon::Dagger);
        assert_eq!(solution.room, Room::Library);

        for player in game.players().values() {
            assert_eq!(player.hand().len(), 6);
            assert!(!player.hand().iter().any(|&card| solution.contains(card)));
        }
    }

    #[test]
    fn test_seats_take_characters_in_order() {
        let game = GameBuilder::new().computers(4).sink(NullSink).build(3).unwrap();

        let characters: Vec<_> = game.players().values().map(Player::character).collect();
        assert_eq!(characters, &Character::ALL[..4]);
        assert_eq!(game.board().location(Token::Character(Character::MissScarlett)), Room::Hall);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let hands = |seed| {
            let game = GameBuilder::new().computers(4).sink(NullSink).build(seed).unwrap();
            let hands: Vec<Vec<Card>> = game.players().values().map(|p| p.hand().to_vec()).collect();
            (*game.solution(), hands)
        };
        assert_eq!(hands(99), hands(99));
    }

    struct Offboard;

    impl Topology for Offboard {
        fn adjacent_rooms(&self, _room: Room) -> &[Room] {
            &[]
        }
        fn secret_passage(&self, _room: Room) -> Option<Room> {
            None
        }
        fn start_position(&self, _character: Character) -> Room {
            Room::Kitchen
        }
        fn has_room(&self, room: Room) -> bool {
            room != Room::Kitchen
        }
    }

    #[test]
    fn test_start_room_must_be_on_board() {
        let err = GameBuilder::new()
            .computers(2)
            .topology(Offboard)
            .sink(NullSink)
            .build(1)
            .unwrap_err();
        assert_eq!(
            err,
            SetupError::StartRoomOffBoard {
                character: Character::MissScarlett,
                room: Room::Kitchen,
            }
        );
    }
}

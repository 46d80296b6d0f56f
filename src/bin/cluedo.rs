//! Cluedo at the terminal.
//!
//! Human seats come first in the seating order, so a human always plays Miss
//! Scarlett and moves first. Computer seats fill the rest of the table.

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rust_cluedo::console::{hand_line, Console, ConsoleInput, ConsoleSink};
use rust_cluedo::{
    GameBuilder, GameConfig, GameError, GameResult, PlayerId, MAX_PLAYERS, MIN_PLAYERS,
};

/// Play a game of Cluedo against computer opponents
#[derive(Parser, Debug)]
#[command(name = "cluedo")]
#[command(about = "A text-playable Cluedo with computer detectives", long_about = None)]
#[command(version)]
struct Cli {
    /// Total number of players (2-6); asked for when omitted
    #[arg(short, long)]
    players: Option<usize>,

    /// Number of computer players (1 to the number of players); asked for when omitted
    #[arg(short, long)]
    computers: Option<usize>,

    /// Seed for a reproducible game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pause before each computer decision, in milliseconds
    #[arg(long, default_value = "1000")]
    delay_ms: u64,

    /// Stop after this many turns; 0 plays on until someone wins
    #[arg(long, default_value = "500")]
    max_turns: u32,

    /// Log the solution at debug level when the game starts
    #[arg(long)]
    reveal_solution: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let console = Console::new(io::stdin().lock(), io::stdout()).into_shared();
    console.borrow_mut().say("--- Welcome to Cluedo! ---");

    let total = match cli.players {
        Some(n) => n,
        None => {
            let counts: Vec<usize> = (MIN_PLAYERS..=MAX_PLAYERS).collect();
            console.borrow_mut().menu("How many players?", &counts)
        }
    };
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&total) {
        error!(total, "Player count must be {MIN_PLAYERS}-{MAX_PLAYERS}");
        return ExitCode::from(2);
    }

    let computers = match cli.computers {
        Some(n) => n,
        None => {
            let counts: Vec<usize> = (1..=total).collect();
            console
                .borrow_mut()
                .menu("How many of them are computer players?", &counts)
        }
    };
    if !(1..=total).contains(&computers) {
        error!(computers, total, "Computer players must number between 1 and the player count");
        return ExitCode::from(2);
    }

    let humans: Vec<PlayerId> = PlayerId::all(total - computers).collect();
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, total, computers, "Starting game");

    let mut config = GameConfig::new().with_think_delay(Duration::from_millis(cli.delay_ms));
    if cli.max_turns > 0 {
        config = config.with_max_turns(cli.max_turns);
    }
    if cli.reveal_solution {
        config = config.with_revealed_solution();
    }

    let mut builder = GameBuilder::new()
        .config(config)
        .sink(ConsoleSink::new(console.clone(), humans.iter().copied()));
    for _ in &humans {
        builder = builder.human(ConsoleInput::new(console.clone()));
    }
    builder = builder.computers(computers);

    let mut game = match builder.build(seed) {
        Ok(game) => game,
        Err(err) => {
            error!(%err, "Game setup failed");
            return ExitCode::FAILURE;
        }
    };

    for &id in &humans {
        let player = &game.players()[id];
        console.borrow_mut().say(format_args!(
            "{} plays {}. Cards: {}",
            player.name(),
            player.character(),
            hand_line(player.hand())
        ));
    }

    match game.run() {
        Ok(GameResult::Winner(winner)) => {
            console
                .borrow_mut()
                .say(format_args!("{winner} solved it: {}", game.solution()));
            ExitCode::SUCCESS
        }
        Ok(GameResult::HouseWins) => {
            console
                .borrow_mut()
                .say(format_args!("Nobody solved it. It was {}", game.solution()));
            ExitCode::SUCCESS
        }
        Err(GameError::TurnLimitReached(limit)) => {
            info!(limit, "Turn limit reached");
            console.borrow_mut().say(format_args!(
                "Nobody solved it within {limit} turns. It was {}",
                game.solution()
            ));
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "Game stopped");
            console
                .borrow_mut()
                .say(format_args!("The solution was {}", game.solution()));
            ExitCode::FAILURE
        }
    }
}

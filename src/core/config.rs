//! Game configuration.
//!
//! Seats, seed and controllers are wired up through
//! [`GameBuilder`](crate::game::GameBuilder); `GameConfig` carries the
//! remaining knobs that shape pacing and diagnostics.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported table (one seat per character).
pub const MAX_PLAYERS: usize = 6;

/// Runtime configuration for a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cosmetic pause before each computer decision.
    /// Zero by default; interactive front ends set a visible delay.
    pub think_delay: Duration,

    /// Safety cap on the number of turns `Game::run` will play.
    /// `None` plays until someone wins or the house wins.
    pub max_turns: Option<u32>,

    /// Log the hidden solution at debug level when the game starts.
    pub reveal_solution: bool,
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the computer thinking delay.
    #[must_use]
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// Cap the number of turns `Game::run` may take.
    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }

    /// Log the solution at game start.
    #[must_use]
    pub fn with_revealed_solution(mut self) -> Self {
        self.reveal_solution = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::new();
        assert_eq!(config.think_delay, Duration::ZERO);
        assert_eq!(config.max_turns, None);
        assert!(!config.reveal_solution);
    }

    #[test]
    fn test_builder_methods() {
        let config = GameConfig::new()
            .with_think_delay(Duration::from_millis(250))
            .with_max_turns(40)
            .with_revealed_solution();

        assert_eq!(config.think_delay, Duration::from_millis(250));
        assert_eq!(config.max_turns, Some(40));
        assert!(config.reveal_solution);
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new().with_max_turns(12);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}

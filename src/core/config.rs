//! Match configuration.
//!
//! A `MatchConfig` describes the table: how many seats, how many of them are
//! human, the shuffle seed, and the house numbers each game reads (bankroll,
//! raise step, shoe size, stand thresholds). Games validate it against
//! their `GameKind` limits before building any state.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// The bundled games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    Poker,
    Blackjack,
    Rummy,
}

impl GameKind {
    pub const MIN_PLAYERS: usize = 2;

    /// Largest table the game supports.
    #[must_use]
    pub const fn max_players(self) -> usize {
        match self {
            GameKind::Poker => 10,
            GameKind::Blackjack => 7,
            GameKind::Rummy => 6,
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameKind::Poker => "Poker",
            GameKind::Blackjack => "Blackjack",
            GameKind::Rummy => "Rummy",
        };
        f.write_str(name)
    }
}

/// Table configuration shared by all games.
///
/// ## Example
///
/// ```
/// use rust_cardroom::core::{GameKind, MatchConfig};
///
/// let config = MatchConfig::new(4)
///     .with_seed(7)
///     .with_starting_bankroll(500);
///
/// assert!(config.validate(GameKind::Poker).is_ok());
/// assert!(MatchConfig::new(8).validate(GameKind::Rummy).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Seats at the table, humans included.
    pub player_count: usize,

    /// The first `human_players` seats are human; the rest are AI.
    pub human_players: usize,

    /// Shuffle seed. `None` draws one from the operating system.
    pub seed: Option<u64>,

    /// Poker bankroll each player starts with.
    pub starting_bankroll: i64,

    /// How far the poker AI raises over the current bet.
    pub raise_increment: i64,

    /// Standard decks combined into the blackjack shoe.
    pub shoe_decks: usize,

    /// Dealer hits below this value.
    pub dealer_stands_on: u32,

    /// Blackjack AI hits below this value.
    pub ai_stands_on: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            human_players: 1,
            seed: None,
            starting_bankroll: 1000,
            raise_increment: 10,
            shoe_decks: 6,
            dealer_stands_on: 17,
            ai_stands_on: 17,
        }
    }
}

impl MatchConfig {
    /// Defaults for a table of `player_count` seats.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_human_players(mut self, humans: usize) -> Self {
        self.human_players = humans;
        self
    }

    /// All seats AI-driven (simulations, tests).
    #[must_use]
    pub fn all_ai(self) -> Self {
        self.with_human_players(0)
    }

    #[must_use]
    pub fn with_starting_bankroll(mut self, bankroll: i64) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    #[must_use]
    pub fn with_raise_increment(mut self, increment: i64) -> Self {
        self.raise_increment = increment;
        self
    }

    #[must_use]
    pub fn with_shoe_decks(mut self, decks: usize) -> Self {
        self.shoe_decks = decks;
        self
    }

    /// Check the table against a game's limits.
    pub fn validate(&self, game: GameKind) -> Result<(), ConfigError> {
        if self.player_count < GameKind::MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers {
                game,
                min: GameKind::MIN_PLAYERS,
                got: self.player_count,
            });
        }
        if self.player_count > game.max_players() {
            return Err(ConfigError::TooManyPlayers {
                game,
                max: game.max_players(),
                got: self.player_count,
            });
        }
        if self.human_players > self.player_count {
            return Err(ConfigError::TooManyHumans {
                humans: self.human_players,
                players: self.player_count,
            });
        }
        match game {
            GameKind::Poker if self.starting_bankroll <= 0 => {
                Err(ConfigError::InvalidBankroll(self.starting_bankroll))
            }
            GameKind::Poker if self.raise_increment <= 0 => {
                Err(ConfigError::InvalidRaiseIncrement(self.raise_increment))
            }
            GameKind::Blackjack if self.shoe_decks == 0 => Err(ConfigError::InvalidShoe),
            _ => Ok(()),
        }
    }
}

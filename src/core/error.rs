//! Error types.
//!
//! - `ConfigError`: match setup failed; the game is never constructed.
//! - `ActionError`: a submitted action was rejected. State is untouched and
//!   the driver is expected to ask again.
//! - `CardError`: a card could not be built or parsed.
//!
//! Deck underflow is not an error anywhere in the crate.

use thiserror::Error;

use super::action::ActionKind;
use super::config::GameKind;

/// Invalid match configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{game} needs at least {min} players, got {got}")]
    TooFewPlayers { game: GameKind, min: usize, got: usize },

    #[error("{game} allows at most {max} players, got {got}")]
    TooManyPlayers { game: GameKind, max: usize, got: usize },

    #[error("{humans} human seats requested for {players} players")]
    TooManyHumans { humans: usize, players: usize },

    #[error("starting bankroll must be positive, got {0}")]
    InvalidBankroll(i64),

    #[error("raise increment must be positive, got {0}")]
    InvalidRaiseIncrement(i64),

    #[error("a blackjack shoe needs at least one deck")]
    InvalidShoe,
}

/// A rejected player action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{action:?} is not a legal action in {game}")]
    Unsupported { game: GameKind, action: ActionKind },

    #[error("insufficient bankroll: need {needed}, have {available}")]
    InsufficientBankroll { needed: i64, available: i64 },

    #[error("raise to {amount} does not exceed the current bet of {current_bet}")]
    RaiseTooSmall { amount: i64, current_bet: i64 },

    #[error("raise needs an amount")]
    MissingAmount,

    #[error("cards do not form a valid {0}")]
    InvalidMeld(&'static str),

    #[error("card {0} is not in the player's hand")]
    CardNotInHand(String),

    #[error("expected {expected} card(s), got {got}")]
    WrongCardCount { expected: usize, got: usize },

    #[error("already drew a card this turn")]
    AlreadyDrew,

    #[error("must draw a card first")]
    MustDrawFirst,

    #[error("the {0} pile is empty")]
    EmptyPile(&'static str),

    #[error("this player's turn is already over")]
    TurnOver,

    #[error("the round is over; settle it before acting")]
    RoundOver,

    #[error("the game is over")]
    GameOver,

    #[error("no players left")]
    NoPlayers,
}

/// Card construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("rank must be between 1 and 13, got {0}")]
    InvalidRank(u8),

    #[error("cannot parse card {0:?}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::TooManyPlayers { game: GameKind::Rummy, max: 6, got: 9 };
        assert_eq!(err.to_string(), "Rummy allows at most 6 players, got 9");

        let err = ActionError::RaiseTooSmall { amount: 10, current_bet: 20 };
        assert_eq!(err.to_string(), "raise to 10 does not exceed the current bet of 20");

        assert_eq!(CardError::InvalidRank(0).to_string(), "rank must be between 1 and 13, got 0");
    }
}

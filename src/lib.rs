//! # rust-cardroom
//!
//! A small multi-game card engine: draw poker, blackjack and rummy on one
//! shared deck, player and turn model.
//!
//! ## Design Principles
//!
//! 1. **Actions In, Status Out**: Every move is a `PlayerAction`. Games
//!    accept it with a `TurnStatus` or reject it with an `ActionError` and
//!    leave the state untouched.
//!
//! 2. **N-Player First**: Tables are built from a `MatchConfig` and sized
//!    per game (2-10 poker, 2-7 blackjack, 2-6 rummy).
//!
//! 3. **Deterministic When Seeded**: Every shuffle goes through the
//!    match's `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, RNG, configuration, errors
//! - `cards`: Cards, ranks, suits and decks
//! - `rules`: The `CardGame` trait and the turn driver
//! - `games`: Poker, blackjack and rummy
//!
//! ## Example
//!
//! ```
//! use rust_cardroom::{new_game, settle, GameKind, MatchConfig, PlayerAction};
//!
//! let mut game = new_game(GameKind::Blackjack, MatchConfig::new(2).with_seed(7)).unwrap();
//! let status = game.play_turn(&PlayerAction::stand()).unwrap();
//! settle(game.as_mut(), status);
//! assert_eq!(game.state().current_player_index(), 1);
//! ```

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ActionError, ActionKind, ActionRecord, CardError, ConfigError, GameKind, GamePhase, GameRng,
    GameState, MatchConfig, PlayerAction, PlayerId, PlayerState,
};

pub use crate::cards::{Card, CardId, Deck, DeckId, Rank, Suit};

pub use crate::rules::{new_game, run_ai_turns, settle, CardGame, TurnStatus};

pub use crate::games::blackjack::hand_value;
pub use crate::games::poker::{evaluate, HandCategory, Stage};
pub use crate::games::rummy::{is_run, is_set, Meld, MeldKind};
pub use crate::games::{BlackjackGame, PokerGame, RummyGame};

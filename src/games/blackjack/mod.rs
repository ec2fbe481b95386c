//! Blackjack: soft-ace hand values, player turns, then the dealer.

mod game;

pub use game::{hand_value, BlackjackGame, BLACKJACK};

//! Bundled games.
//!
//! Each game owns a `GameState` plus its own table state and implements
//! `CardGame`:
//! - `poker`: betting stages, hand categories, multi-round matches
//! - `blackjack`: soft-ace totals against a dealer
//! - `rummy`: sets, runs and the discard pile

pub mod blackjack;
pub mod poker;
pub mod rummy;

pub use blackjack::BlackjackGame;
pub use poker::PokerGame;
pub use rummy::RummyGame;

//! Poker: hole cards, four betting stages, category-only showdowns.

mod eval;
mod game;

pub use eval::{evaluate, HandCategory};
pub use game::{PokerGame, Showdown, Stage};

//! Game rules trait and match driving.
//!
//! Games implement `CardGame` to define:
//! - How the deck is built and dealt
//! - How one action modifies state
//! - What the built-in AI plays
//! - Win conditions
//!
//! `driver` holds the game-agnostic pieces that sit between a front end
//! and a `CardGame`.

pub mod driver;
pub mod engine;

pub use driver::{new_game, run_ai_turns, settle};
pub use engine::{CardGame, TurnStatus};

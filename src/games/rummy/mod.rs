//! Rummy: draw, declare sets and runs, discard.

mod game;
mod melds;

pub use game::{ai_discard, cards_per_player, RummyGame};
pub use melds::{in_any_triple, is_meld, is_run, is_set, Meld, MeldKind, MIN_MELD};

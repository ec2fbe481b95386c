//! Cards and decks.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card identity (suit, rank, optional metadata)
//! - `Rank` / `Suit`: Validated rank 1..=13 (Ace low) and the four suits
//! - `Deck`: Draw pile plus discard pile with reshuffle-on-exhaustion
//! - `Attributes` / `CardEffect`: Optional per-card metadata

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{AttributeKey, AttributeValue, Attributes, CardEffect};
pub use card::{standard_cards, Card, CardId, CardTypeId, Rank, Suit};
pub use deck::{Deck, DeckId};

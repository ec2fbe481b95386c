//! Draw pile plus discard pile.
//!
//! The front of `active` is the top of the pile. Draws are best-effort:
//! when the active pile runs short the discard pile is folded back in and
//! reshuffled, and when both are empty the caller simply gets fewer cards.
//! The returned length is the contract, not the requested count.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::card::{standard_cards, Card};
use crate::core::rng::GameRng;

/// Name of a deck in a `GameState` registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckId(pub String);

impl DeckId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The single deck every bundled game plays from.
    #[must_use]
    pub fn main() -> Self {
        Self::new("main")
    }
}

impl From<&str> for DeckId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered draw pile with its discard pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    id: DeckId,
    active: Vec<Card>,
    discard: Vec<Card>,
}

impl Deck {
    /// Create a deck from cards in draw order (first card is drawn first).
    pub fn new(id: impl Into<DeckId>, cards: Vec<Card>) -> Self {
        Self {
            id: id.into(),
            active: cards,
            discard: Vec::new(),
        }
    }

    /// An unshuffled 52-card deck.
    pub fn standard(id: impl Into<DeckId>) -> Self {
        Self::new(id, standard_cards())
    }

    /// `decks` standard decks combined into one unshuffled shoe.
    pub fn shoe(id: impl Into<DeckId>, decks: usize) -> Self {
        let single = standard_cards();
        let mut cards = Vec::with_capacity(single.len() * decks);
        for _ in 0..decks {
            cards.extend(single.iter().cloned());
        }
        Self::new(id, cards)
    }

    #[must_use]
    pub fn id(&self) -> &DeckId {
        &self.id
    }

    /// Shuffle the active pile.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.active);
    }

    /// Draw up to `count` cards from the top.
    ///
    /// Cards still in the active pile come first; if that is not enough,
    /// the discard pile is merged in, reshuffled, and the draw continues.
    pub fn draw(&mut self, count: usize, rng: &mut GameRng) -> Vec<Card> {
        if count <= self.active.len() {
            return self.active.drain(..count).collect();
        }

        let mut drawn: Vec<Card> = self.active.drain(..).collect();

        if !self.discard.is_empty() {
            log::debug!(
                "deck {}: reshuffling {} discards into the draw pile",
                self.id,
                self.discard.len()
            );
            self.active.append(&mut self.discard);
            self.shuffle(rng);
        }

        let rest = (count - drawn.len()).min(self.active.len());
        drawn.extend(self.active.drain(..rest));
        drawn
    }

    /// Put cards on the discard pile (last one ends up on top).
    pub fn add_to_discard(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard.extend(cards);
    }

    /// The face-up top of the discard pile.
    #[must_use]
    pub fn top_discard(&self) -> Option<&Card> {
        self.discard.last()
    }

    /// Take the top of the discard pile.
    pub fn take_top_discard(&mut self) -> Option<Card> {
        self.discard.pop()
    }

    /// Discard pile, bottom first.
    #[must_use]
    pub fn discards(&self) -> &[Card] {
        &self.discard
    }

    /// Draw pile, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.active
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn discard_count(&self) -> usize {
        self.discard.len()
    }

    /// Cards in both piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len() + self.discard.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.discard.is_empty()
    }
}

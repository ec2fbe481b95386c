//! Set and run predicates.
//!
//! - Set: three or more cards of one rank.
//! - Run: three or more cards of one suit whose ranks, once sorted, step by
//!   exactly one. The Ace is rank 1 only, so Q-K-A never runs.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;

/// Smallest legal meld.
pub const MIN_MELD: usize = 3;

#[must_use]
pub fn is_set(cards: &[Card]) -> bool {
    match cards.split_first() {
        Some((first, rest)) if cards.len() >= MIN_MELD => {
            rest.iter().all(|c| c.rank == first.rank)
        }
        _ => false,
    }
}

#[must_use]
pub fn is_run(cards: &[Card]) -> bool {
    if cards.len() < MIN_MELD {
        return false;
    }
    let suit = cards[0].suit;
    if cards.iter().any(|c| c.suit != suit) {
        return false;
    }

    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    ranks.sort_unstable();
    ranks.windows(2).all(|w| w[1] == w[0] + 1)
}

/// Set or run.
#[must_use]
pub fn is_meld(cards: &[Card]) -> bool {
    is_set(cards) || is_run(cards)
}

/// Whether `hand[index]` forms a three-card set or run with two other
/// cards in `hand`.
#[must_use]
pub fn in_any_triple(hand: &[Card], index: usize) -> bool {
    let Some(card) = hand.get(index) else {
        return false;
    };
    let others: Vec<&Card> = hand
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, c)| c)
        .collect();

    for (i, a) in others.iter().enumerate() {
        for b in &others[i + 1..] {
            let triple = [card.clone(), (*a).clone(), (*b).clone()];
            if is_meld(&triple) {
                return true;
            }
        }
    }
    false
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeldKind {
    Set,
    Run,
}

impl MeldKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MeldKind::Set => "set",
            MeldKind::Run => "run",
        }
    }

    #[must_use]
    pub fn accepts(self, cards: &[Card]) -> bool {
        match self {
            MeldKind::Set => is_set(cards),
            MeldKind::Run => is_run(cards),
        }
    }
}

/// A declared meld, kept on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    pub kind: MeldKind,
    pub owner: PlayerId,
    pub cards: Vec<Card>,
}

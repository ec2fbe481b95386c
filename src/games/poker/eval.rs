//! Hand categories over 2 to 7 cards.
//!
//! Histograms are fixed arrays indexed by rank and suit, and straights are
//! found on a rank bitmask where the Ace occupies both bit 1 and bit 14.
//! Only windows topped by 6 or higher count, so the Ace plays high
//! (10-J-Q-K-A) but never low: A-2-3-4-5 is not a straight.
//!
//! Categories carry no kickers. Two hands of the same category compare
//! equal.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

/// Hand strength, weakest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
            HandCategory::RoyalFlush => "Royal flush",
        };
        f.write_str(name)
    }
}

const ACE_HIGH_BIT: u32 = 14;

fn rank_mask<'a>(cards: impl Iterator<Item = &'a Card>) -> u16 {
    cards.fold(0u16, |mask, card| {
        let mut mask = mask | (1 << card.rank.value());
        if card.rank.is_ace() {
            mask |= 1 << ACE_HIGH_BIT;
        }
        mask
    })
}

/// Highest card of the best straight in `mask`, 6..=14.
fn straight_top(mask: u16) -> Option<u32> {
    const WINDOW: u16 = 0b1_1111;
    (6..=ACE_HIGH_BIT)
        .rev()
        .find(|&top| (mask >> (top - 4)) & WINDOW == WINDOW)
}

/// Categorize the best hand that can be made from `cards`.
///
/// ```
/// use rust_cardroom::cards::Card;
/// use rust_cardroom::games::poker::{evaluate, HandCategory};
///
/// let cards: Vec<Card> = ["7h", "7d", "7c", "7s", "Kd"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(evaluate(&cards), HandCategory::FourOfAKind);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandCategory {
    let mut rank_counts = [0u8; 13];
    let mut suit_counts = [0u8; 4];
    for card in cards {
        rank_counts[card.rank.index()] += 1;
        suit_counts[card.suit.index()] += 1;
    }

    let flush_suit = Suit::ALL
        .into_iter()
        .find(|suit| suit_counts[suit.index()] >= 5);

    if let Some(suit) = flush_suit {
        let suited = rank_mask(cards.iter().filter(|c| c.suit == suit));
        match straight_top(suited) {
            Some(ACE_HIGH_BIT) => return HandCategory::RoyalFlush,
            Some(_) => return HandCategory::StraightFlush,
            None => {}
        }
    }

    let quads = rank_counts.iter().any(|&n| n >= 4);
    let trips = rank_counts.iter().filter(|&&n| n == 3).count();
    let pairs = rank_counts.iter().filter(|&&n| n == 2).count();

    if quads {
        HandCategory::FourOfAKind
    } else if trips >= 1 && (pairs >= 1 || trips >= 2) {
        HandCategory::FullHouse
    } else if flush_suit.is_some() {
        HandCategory::Flush
    } else if straight_top(rank_mask(cards.iter())).is_some() {
        HandCategory::Straight
    } else if trips >= 1 {
        HandCategory::ThreeOfAKind
    } else if pairs >= 2 {
        HandCategory::TwoPair
    } else if pairs == 1 {
        HandCategory::Pair
    } else {
        HandCategory::HighCard
    }
}

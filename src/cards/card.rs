//! Playing cards.
//!
//! A `Card` is immutable once built. Multi-deck shoes clone cards by value,
//! so two cards may share a `CardId`; code that removes cards from a hand
//! removes one matching card per request, never all duplicates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue, Attributes, CardEffect};
use crate::core::error::CardError;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits, in standard deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Dense index for fixed-size histograms.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank, rejecting values outside 1..=13.
    pub fn new(value: u8) -> Result<Self, CardError> {
        if (1..=13).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CardError::InvalidRank(value))
        }
    }

    /// All ranks, Ace first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    /// Raw rank value (1..=13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Dense index 0..13 for fixed-size histograms.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.0 == 1
    }

    #[must_use]
    pub const fn is_face(self) -> bool {
        self.0 > 10
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.0 {
            1 => "Ace",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "Jack",
            12 => "Queen",
            _ => "King",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card identity. Standard cards derive it from suit and rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Identity of the standard card with this rank and suit.
    #[must_use]
    pub const fn standard(rank: Rank, suit: Suit) -> Self {
        Self((suit.index() * 13 + rank.index()) as u16)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = Suit::ALL.get(self.0 as usize / 13);
        match suit {
            Some(suit) => write!(f, "{}-{}", suit, self.0 % 13 + 1),
            None => write!(f, "Card({})", self.0),
        }
    }
}

/// Card type identifier. Games define what non-standard types mean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardTypeId(pub u32);

impl CardTypeId {
    /// An ordinary suited playing card.
    pub const STANDARD: CardTypeId = CardTypeId(0);
}

/// A playing card.
///
/// ## Example
///
/// ```
/// use rust_cardroom::cards::{Card, Rank, Suit};
///
/// let card = Card::standard(Rank::ACE, Suit::Spades);
/// assert_eq!(card.name, "Ace of Spades");
/// assert_eq!(card.id.to_string(), "Spades-1");
///
/// let parsed: Card = "Ts".parse().unwrap();
/// assert_eq!(parsed.rank, Rank::TEN);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub suit: Suit,
    pub rank: Rank,
    pub card_type: CardTypeId,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub effects: Vec<CardEffect>,
}

impl Card {
    /// Create a card with explicit identity.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        suit: Suit,
        rank: Rank,
        card_type: CardTypeId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            suit,
            rank,
            card_type,
            attributes: Attributes::default(),
            effects: Vec::new(),
        }
    }

    /// A standard deck card, e.g. "Queen of Hearts".
    #[must_use]
    pub fn standard(rank: Rank, suit: Suit) -> Self {
        Self::new(
            CardId::standard(rank, suit),
            format!("{} of {}", rank, suit),
            suit,
            rank,
            CardTypeId::STANDARD,
        )
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Add an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Get an integer attribute with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get_attr(key)
            .and_then(AttributeValue::as_int)
            .unwrap_or(default)
    }

    /// Short label such as `Q♥` or `10♠`.
    #[must_use]
    pub fn label(&self) -> String {
        let rank = match self.rank.value() {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        };
        format!("{}{}", rank, self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Parses two-character codes like `Ah`, `Td`, `7c`.
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r), Some(u), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::Parse(s.to_string()));
        };

        let rank = match r.to_ascii_uppercase() {
            'A' => Rank::ACE,
            'T' => Rank::TEN,
            'J' => Rank::JACK,
            'Q' => Rank::QUEEN,
            'K' => Rank::KING,
            d @ '2'..='9' => Rank::new(d as u8 - b'0')?,
            _ => return Err(CardError::Parse(s.to_string())),
        };

        let suit = match u.to_ascii_lowercase() {
            'h' => Suit::Hearts,
            'd' => Suit::Diamonds,
            'c' => Suit::Clubs,
            's' => Suit::Spades,
            _ => return Err(CardError::Parse(s.to_string())),
        };

        Ok(Card::standard(rank, suit))
    }
}

/// Build a 52-card standard deck: Hearts, Diamonds, Clubs, Spades, Ace to King.
#[must_use]
pub fn standard_cards() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::all().map(move |rank| Card::standard(rank, suit)))
        .collect()
}

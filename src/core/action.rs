//! The command contract between drivers and games.
//!
//! Every move is a `PlayerAction`: a closed `ActionKind` plus the cards it
//! refers to and an optional amount. For example:
//! - "Call" = kind only
//! - "Raise to 40" = kind + amount
//! - "Declare run 3♥ 4♥ 5♥" = kind + 3 cards
//!
//! Games reject kinds they do not play with `ActionError::Unsupported`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::Card;

/// Every action any bundled game understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Quit,
    // Poker
    Fold,
    Call,
    Raise,
    // Blackjack
    Hit,
    Stand,
    // Rummy
    DrawDeck,
    DrawDiscard,
    Discard,
    DeclareSet,
    DeclareRun,
}

/// A submitted action.
///
/// ```
/// use rust_cardroom::core::{ActionKind, PlayerAction};
///
/// let raise = PlayerAction::raise(40);
/// assert_eq!(raise.kind, ActionKind::Raise);
/// assert_eq!(raise.amount, Some(40));
/// assert!(raise.cards.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAction {
    pub kind: ActionKind,

    /// Referenced cards. Inline for up to 4 (discards, most melds).
    pub cards: SmallVec<[Card; 4]>,

    pub amount: Option<i64>,
}

impl PlayerAction {
    /// An action with no cards and no amount.
    #[must_use]
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            cards: SmallVec::new(),
            amount: None,
        }
    }

    #[must_use]
    pub fn with_cards(kind: ActionKind, cards: &[Card]) -> Self {
        Self {
            kind,
            cards: SmallVec::from_vec(cards.to_vec()),
            amount: None,
        }
    }

    #[must_use]
    pub fn quit() -> Self {
        Self::new(ActionKind::Quit)
    }

    #[must_use]
    pub fn fold() -> Self {
        Self::new(ActionKind::Fold)
    }

    #[must_use]
    pub fn call() -> Self {
        Self::new(ActionKind::Call)
    }

    /// Raise the current bet to `amount` (a total, not an increment).
    #[must_use]
    pub fn raise(amount: i64) -> Self {
        Self {
            amount: Some(amount),
            ..Self::new(ActionKind::Raise)
        }
    }

    #[must_use]
    pub fn hit() -> Self {
        Self::new(ActionKind::Hit)
    }

    #[must_use]
    pub fn stand() -> Self {
        Self::new(ActionKind::Stand)
    }

    #[must_use]
    pub fn draw_deck() -> Self {
        Self::new(ActionKind::DrawDeck)
    }

    #[must_use]
    pub fn draw_discard() -> Self {
        Self::new(ActionKind::DrawDiscard)
    }

    #[must_use]
    pub fn discard(card: Card) -> Self {
        Self::with_cards(ActionKind::Discard, &[card])
    }

    #[must_use]
    pub fn declare_set(cards: &[Card]) -> Self {
        Self::with_cards(ActionKind::DeclareSet, cards)
    }

    #[must_use]
    pub fn declare_run(cards: &[Card]) -> Self {
        Self::with_cards(ActionKind::DeclareRun, cards)
    }
}

/// An accepted action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: PlayerAction,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: PlayerAction, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Stable seat identifier. It never changes when players fold out of the
//! turn order, so it is what actions, records and results refer to.
//!
//! ## PlayerState
//!
//! One player's hand, per-round contribution (`score`) and bankroll.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Player identifier, 0-based by seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a table of `player_count` seats.
    ///
    /// ```
    /// use rust_cardroom::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub name: String,
    /// Seat driven by a person rather than the built-in AI.
    pub human: bool,
    hand: Vec<Card>,
    score: i64,
    bankroll: i64,
}

impl PlayerState {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            human: false,
            hand: Vec::new(),
            score: 0,
            bankroll: 0,
        }
    }

    /// Mark the seat as human-controlled.
    #[must_use]
    pub fn human(mut self) -> Self {
        self.human = true;
        self
    }

    #[must_use]
    pub fn with_bankroll(mut self, bankroll: i64) -> Self {
        self.bankroll = bankroll;
        self
    }

    // === Hand ===

    /// Cards in insertion order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn add_to_hand(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// Check that every requested card is in hand, counting duplicates.
    #[must_use]
    pub fn holds(&self, cards: &[Card]) -> bool {
        self.first_missing(cards).is_none()
    }

    /// First requested card the hand cannot supply, counting duplicates.
    #[must_use]
    pub fn first_missing<'a>(&self, cards: &'a [Card]) -> Option<&'a Card> {
        let mut taken = vec![false; self.hand.len()];
        for wanted in cards {
            match (0..self.hand.len()).find(|&i| !taken[i] && self.hand[i] == *wanted) {
                Some(i) => taken[i] = true,
                None => return Some(wanted),
            }
        }
        None
    }

    /// Remove one matching card per requested card and return the removed
    /// cards. Requests the hand cannot satisfy are skipped.
    pub fn remove_from_hand(&mut self, cards: &[Card]) -> Vec<Card> {
        let mut removed = Vec::with_capacity(cards.len());
        for wanted in cards {
            if let Some(pos) = self.hand.iter().position(|c| c == wanted) {
                removed.push(self.hand.remove(pos));
            }
        }
        removed
    }

    /// Empty the hand, returning its cards.
    pub fn clear_hand(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.hand)
    }

    // === Score and bankroll ===

    /// Per-round contribution in poker; points in the other games.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn update_score(&mut self, delta: i64) {
        self.score += delta;
    }

    pub fn set_score(&mut self, score: i64) {
        self.score = score;
    }

    #[must_use]
    pub fn bankroll(&self) -> i64 {
        self.bankroll
    }

    pub fn update_bankroll(&mut self, delta: i64) {
        self.bankroll += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "p1");
    }

    #[test]
    fn test_hand_insertion_order() {
        let mut player = PlayerState::new(PlayerId::new(0), "Alice");
        player.add_to_hand(vec![card("Kh"), card("2c")]);
        player.add_to_hand(vec![card("7d")]);

        assert_eq!(player.hand(), &[card("Kh"), card("2c"), card("7d")]);
    }

    #[test]
    fn test_remove_counts_duplicates() {
        let mut player = PlayerState::new(PlayerId::new(0), "Alice");
        player.add_to_hand(vec![card("9s"), card("9s"), card("3d")]);

        let removed = player.remove_from_hand(&[card("9s")]);
        assert_eq!(removed, vec![card("9s")]);
        assert_eq!(player.hand(), &[card("9s"), card("3d")]);

        let removed = player.remove_from_hand(&[card("Ah")]);
        assert!(removed.is_empty());
        assert_eq!(player.hand().len(), 2);
    }

    #[test]
    fn test_holds() {
        let mut player = PlayerState::new(PlayerId::new(0), "Alice");
        player.add_to_hand(vec![card("9s"), card("3d")]);

        assert!(player.holds(&[card("3d"), card("9s")]));
        assert!(!player.holds(&[card("9s"), card("9s")]));
        assert_eq!(player.first_missing(&[card("9s"), card("4d")]), Some(&card("4d")));
    }

    #[test]
    fn test_score_and_bankroll() {
        let mut player = PlayerState::new(PlayerId::new(2), "Bot").with_bankroll(100);
        player.update_score(20);
        player.update_bankroll(-20);

        assert_eq!(player.score(), 20);
        assert_eq!(player.bankroll(), 80);

        player.set_score(0);
        assert_eq!(player.score(), 0);
        assert!(!player.human);
        assert!(PlayerState::new(PlayerId::new(0), "Me").human().human);
    }
}

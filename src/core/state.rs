//! Shared match state.
//!
//! `GameState` holds what every game needs:
//! - Seated players in turn order, and players sidelined for the round
//! - The circular turn pointer and the match phase
//! - Named decks and the RNG that shuffles them
//! - History of accepted actions
//!
//! ## Turn pointer invariant
//!
//! `current_player_index < players.len()` whenever any player is seated.
//! Every removal goes through one place that re-clamps the pointer, so the
//! player who was next in line becomes current.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, PlayerAction};
use super::config::MatchConfig;
use super::player::{PlayerId, PlayerState};
use super::rng::GameRng;
use crate::cards::{Card, Deck, DeckId};

/// Match lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Setup,
    InProgress,
    Complete,
}

/// Full match state.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Players still in turn order.
    players: Vec<PlayerState>,

    /// Players out of the current round who come back for the next one.
    sidelined: Vec<PlayerState>,

    current_player_index: usize,

    phase: GamePhase,

    decks: FxHashMap<DeckId, Deck>,

    /// Shuffle source for every deck in this match.
    pub rng: GameRng,

    /// Turn number (starts at 1).
    turn_number: u32,

    /// Action sequence within turn.
    action_sequence: u32,

    history: Vec<ActionRecord>,
}

impl GameState {
    /// Create an empty state in the `Setup` phase.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            players: Vec::new(),
            sidelined: Vec::new(),
            current_player_index: 0,
            phase: GamePhase::Setup,
            decks: FxHashMap::default(),
            rng,
            turn_number: 1,
            action_sequence: 0,
            history: Vec::new(),
        }
    }

    /// Seat the table described by `config`.
    ///
    /// The first `human_players` seats are named "Human Player" (numbered
    /// when there are several); the rest are "AI Player n".
    #[must_use]
    pub fn for_table(config: &MatchConfig) -> Self {
        let mut state = Self::new(GameRng::from_seed_option(config.seed));
        for id in PlayerId::all(config.player_count) {
            let player = if id.index() < config.human_players {
                let name = if config.human_players == 1 {
                    "Human Player".to_string()
                } else {
                    format!("Human Player {}", id.index() + 1)
                };
                PlayerState::new(id, name).human()
            } else {
                PlayerState::new(id, format!("AI Player {}", id.index()))
            };
            state.add_player(player);
        }
        state
    }

    // === Players ===

    pub fn add_player(&mut self, player: PlayerState) {
        self.players.push(player);
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn players_mut(&mut self) -> impl Iterator<Item = &mut PlayerState> {
        self.players.iter_mut()
    }

    /// Players out of the current round.
    #[must_use]
    pub fn sidelined(&self) -> &[PlayerState] {
        &self.sidelined
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Snapshot of seated ids, safe to iterate while removing players.
    #[must_use]
    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }

    #[must_use]
    pub fn position_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// A seated player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut PlayerState> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    // === Turn pointer ===

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&PlayerState> {
        self.players.get(self.current_player_index)
    }

    pub fn current_player_mut(&mut self) -> Option<&mut PlayerState> {
        self.players.get_mut(self.current_player_index)
    }

    #[must_use]
    pub fn current_player_id(&self) -> Option<PlayerId> {
        self.current_player().map(|p| p.id)
    }

    /// Advance to the next player, wrapping around.
    pub fn next_turn(&mut self) {
        if self.players.is_empty() {
            return;
        }
        self.current_player_index = (self.current_player_index + 1) % self.players.len();
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    /// Hand the turn to the first seated player.
    pub fn reset_turn_pointer(&mut self) {
        self.current_player_index = 0;
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    // === Removal ===

    fn remove_at(&mut self, index: usize) -> PlayerState {
        let player = self.players.remove(index);
        if index < self.current_player_index {
            self.current_player_index -= 1;
        }
        if self.current_player_index >= self.players.len() {
            self.current_player_index = 0;
        }
        player
    }

    /// Take a player out of turn order for good.
    pub fn remove_player(&mut self, id: PlayerId) -> Option<PlayerState> {
        let index = self.position_of(id)?;
        Some(self.remove_at(index))
    }

    /// Take a player out of turn order until `restore_sidelined`.
    ///
    /// Returns false if the player is not seated.
    pub fn sideline_player(&mut self, id: PlayerId) -> bool {
        match self.position_of(id) {
            Some(index) => {
                let player = self.remove_at(index);
                self.sidelined.push(player);
                true
            }
            None => false,
        }
    }

    /// Sideline a batch collected during a scan over the players.
    pub fn sideline_players(&mut self, ids: &[PlayerId]) {
        for &id in ids {
            self.sideline_player(id);
        }
    }

    /// Bring sidelined players back, restoring seat order.
    pub fn restore_sidelined(&mut self) {
        let current = self.current_player_id();
        self.players.append(&mut self.sidelined);
        self.players.sort_by_key(|p| p.id);
        self.current_player_index = current
            .and_then(|id| self.position_of(id))
            .unwrap_or(0);
    }

    // === Phase ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == GamePhase::Complete
    }

    // === Decks ===

    /// Register a deck under its id, replacing any deck with that id.
    pub fn add_deck(&mut self, deck: Deck) {
        self.decks.insert(deck.id().clone(), deck);
    }

    #[must_use]
    pub fn deck(&self, id: &DeckId) -> Option<&Deck> {
        self.decks.get(id)
    }

    pub fn deck_mut(&mut self, id: &DeckId) -> Option<&mut Deck> {
        self.decks.get_mut(id)
    }

    /// Shuffle a registered deck with the match RNG.
    pub fn shuffle_deck(&mut self, id: &DeckId) {
        if let Some(deck) = self.decks.get_mut(id) {
            deck.shuffle(&mut self.rng);
        }
    }

    /// Draw up to `count` cards from a registered deck.
    ///
    /// An unknown deck yields no cards, like an exhausted one.
    pub fn draw(&mut self, id: &DeckId, count: usize) -> Vec<Card> {
        match self.decks.get_mut(id) {
            Some(deck) => deck.draw(count, &mut self.rng),
            None => Vec::new(),
        }
    }

    /// Draw up to `count` cards into a seated player's hand.
    ///
    /// Returns how many cards the player actually received; an unseated
    /// player receives nothing and the deck is left alone.
    pub fn deal_to(&mut self, player: PlayerId, id: &DeckId, count: usize) -> usize {
        let Some(index) = self.position_of(player) else {
            return 0;
        };
        let cards = self.draw(id, count);
        let dealt = cards.len();
        self.players[index].add_to_hand(cards);
        dealt
    }

    // === Action History ===

    /// Record an accepted action for the current turn.
    pub fn record_action(&mut self, player: PlayerId, action: PlayerAction) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history
            .push(ActionRecord::new(player, action, self.turn_number, sequence));
    }

    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }
}

//! Rummy turn state machine.
//!
//! A turn is: draw once (stock or the face-up discard), declare any number
//! of sets and runs, then discard one card. The discard pile is the main
//! deck's own discard pile, so an exhausted stock is rebuilt from it.

use crate::cards::{Card, Deck, DeckId};
use crate::core::{
    ActionError, ActionKind, ConfigError, GameKind, GamePhase, GameState, MatchConfig,
    PlayerAction, PlayerId,
};
use crate::rules::{CardGame, TurnStatus};

use super::melds::{in_any_triple, is_meld, Meld, MeldKind};

/// Hand size by table size.
#[must_use]
pub const fn cards_per_player(players: usize) -> usize {
    match players {
        0..=2 => 7,
        3..=4 => 6,
        _ => 5,
    }
}

/// Pick the card the built-in AI throws away.
///
/// Ranks are scanned high to low (hand order breaks ties):
/// 1. a card whose removal leaves the rest of the hand a single set or run
/// 2. otherwise the highest card that is in no three-card set or run
/// 3. otherwise the highest card
#[must_use]
pub fn ai_discard(hand: &[Card]) -> Option<Card> {
    let mut order: Vec<usize> = (0..hand.len()).collect();
    order.sort_by(|&a, &b| hand[b].rank.cmp(&hand[a].rank));

    let completes_hand = |index: usize| {
        let rest: Vec<Card> = hand
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, c)| c.clone())
            .collect();
        is_meld(&rest)
    };

    order
        .iter()
        .copied()
        .find(|&i| completes_hand(i))
        .or_else(|| order.iter().copied().find(|&i| !in_any_triple(hand, i)))
        .or_else(|| order.first().copied())
        .map(|i| hand[i].clone())
}

/// A rummy match.
pub struct RummyGame {
    state: GameState,
    /// Whether the current player has drawn this turn.
    has_drawn: bool,
    melds: Vec<Meld>,
    winner: Option<PlayerId>,
    stacked: Option<Vec<Card>>,
}

impl RummyGame {
    /// Seat the table, shuffle and deal.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        Self::build(config, None)
    }

    /// Deal from `cards` in order: each hand in seat order, then the first
    /// discard, then the stock.
    pub fn with_stacked_deck(config: MatchConfig, cards: Vec<Card>) -> Result<Self, ConfigError> {
        Self::build(config, Some(cards))
    }

    fn build(config: MatchConfig, stacked: Option<Vec<Card>>) -> Result<Self, ConfigError> {
        config.validate(GameKind::Rummy)?;

        let mut game = Self {
            state: GameState::for_table(&config),
            has_drawn: false,
            melds: Vec::new(),
            winner: None,
            stacked,
        };
        game.setup_deck();
        game.deal_initial_cards();
        Ok(game)
    }

    /// Discard pile, bottom first. The last card is face up.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        self.state
            .deck(&DeckId::main())
            .map(Deck::discards)
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile().last()
    }

    /// Melds declared so far, oldest first.
    #[must_use]
    pub fn melds(&self) -> &[Meld] {
        &self.melds
    }

    #[must_use]
    pub fn has_drawn(&self) -> bool {
        self.has_drawn
    }

    fn draw_from_stock(&mut self, id: PlayerId) -> Result<(), ActionError> {
        if self.has_drawn {
            return Err(ActionError::AlreadyDrew);
        }
        if self.state.deal_to(id, &DeckId::main(), 1) == 0 {
            log::warn!("stock and discard pile are both empty; {} draws nothing", id);
        }
        self.has_drawn = true;
        Ok(())
    }

    fn draw_from_discard(&mut self, id: PlayerId) -> Result<(), ActionError> {
        if self.has_drawn {
            return Err(ActionError::AlreadyDrew);
        }
        let card = self
            .state
            .deck_mut(&DeckId::main())
            .and_then(Deck::take_top_discard)
            .ok_or(ActionError::EmptyPile("discard"))?;

        if let Some(player) = self.state.player_mut(id) {
            player.add_to_hand([card]);
        }
        self.has_drawn = true;
        Ok(())
    }

    fn declare(&mut self, id: PlayerId, kind: MeldKind, cards: &[Card]) -> Result<(), ActionError> {
        if !self.has_drawn {
            return Err(ActionError::MustDrawFirst);
        }
        let player = self.state.player_mut(id).ok_or(ActionError::NoPlayers)?;
        if let Some(missing) = player.first_missing(cards) {
            return Err(ActionError::CardNotInHand(missing.label()));
        }
        if !kind.accepts(cards) {
            return Err(ActionError::InvalidMeld(kind.name()));
        }

        let cards = player.remove_from_hand(cards);
        log::debug!("{} declares a {} of {} cards", id, kind.name(), cards.len());
        self.melds.push(Meld { kind, owner: id, cards });
        Ok(())
    }

    fn discard(&mut self, id: PlayerId, cards: &[Card]) -> Result<(), ActionError> {
        if !self.has_drawn {
            return Err(ActionError::MustDrawFirst);
        }
        if cards.len() != 1 {
            return Err(ActionError::WrongCardCount {
                expected: 1,
                got: cards.len(),
            });
        }
        let player = self.state.player_mut(id).ok_or(ActionError::NoPlayers)?;
        if let Some(missing) = player.first_missing(cards) {
            return Err(ActionError::CardNotInHand(missing.label()));
        }

        let removed = player.remove_from_hand(cards);
        if let Some(deck) = self.state.deck_mut(&DeckId::main()) {
            deck.add_to_discard(removed);
        }
        self.has_drawn = false;
        Ok(())
    }
}

impl CardGame for RummyGame {
    fn kind(&self) -> GameKind {
        GameKind::Rummy
    }

    fn state(&self) -> &GameState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    fn setup_deck(&mut self) {
        match self.stacked.take() {
            Some(cards) => self.state.add_deck(Deck::new(DeckId::main(), cards)),
            None => {
                self.state.add_deck(Deck::standard(DeckId::main()));
                self.state.shuffle_deck(&DeckId::main());
            }
        }
    }

    fn deal_initial_cards(&mut self) {
        let per_player = cards_per_player(self.state.player_count());
        for id in self.state.player_ids() {
            self.state.deal_to(id, &DeckId::main(), per_player);
        }

        let upcard = self.state.draw(&DeckId::main(), 1);
        if let Some(deck) = self.state.deck_mut(&DeckId::main()) {
            deck.add_to_discard(upcard);
        }
        self.state.set_phase(GamePhase::InProgress);
    }

    fn play_turn(&mut self, action: &PlayerAction) -> Result<TurnStatus, ActionError> {
        if self.state.is_complete() {
            return Err(ActionError::GameOver);
        }
        let id = self.state.current_player_id().ok_or(ActionError::NoPlayers)?;

        let status = match action.kind {
            ActionKind::Quit => {
                self.state.set_phase(GamePhase::Complete);
                TurnStatus::Quit
            }
            ActionKind::DrawDeck => {
                self.draw_from_stock(id)?;
                TurnStatus::Continue
            }
            ActionKind::DrawDiscard => {
                self.draw_from_discard(id)?;
                TurnStatus::Continue
            }
            ActionKind::DeclareSet => {
                self.declare(id, MeldKind::Set, &action.cards)?;
                TurnStatus::Continue
            }
            ActionKind::DeclareRun => {
                self.declare(id, MeldKind::Run, &action.cards)?;
                TurnStatus::Continue
            }
            ActionKind::Discard => {
                self.discard(id, &action.cards)?;
                TurnStatus::Ended
            }
            other => {
                return Err(ActionError::Unsupported {
                    game: GameKind::Rummy,
                    action: other,
                })
            }
        };

        self.state.record_action(id, action.clone());
        Ok(status)
    }

    fn play_ai_turn(&mut self) -> Result<TurnStatus, ActionError> {
        if !self.has_drawn {
            self.play_turn(&PlayerAction::draw_deck())?;
        }

        let choice = self
            .state
            .current_player()
            .and_then(|p| ai_discard(p.hand()));

        match choice {
            Some(card) => self.play_turn(&PlayerAction::discard(card)),
            None => {
                // Nothing to throw: the hand was melded away
                self.has_drawn = false;
                Ok(TurnStatus::Ended)
            }
        }
    }

    fn check_win_condition(&mut self) -> Option<PlayerId> {
        if self.state.is_complete() {
            return self.winner;
        }

        let winner = self
            .state
            .players()
            .iter()
            .find(|p| p.hand().is_empty() || is_meld(p.hand()))?;

        log::info!("{} goes out", winner.name);
        self.winner = Some(winner.id);
        self.state.set_phase(GamePhase::Complete);
        self.winner
    }
}

//! Blackjack against a house dealer.

use rustc_hash::FxHashSet;

use crate::cards::{Card, Deck, DeckId};
use crate::core::{
    ActionError, ActionKind, ConfigError, GameKind, GamePhase, GameState, MatchConfig,
    PlayerAction, PlayerId,
};
use crate::rules::{CardGame, TurnStatus};

/// Best total without going over.
pub const BLACKJACK: u32 = 21;

const INITIAL_CARDS: usize = 2;

/// Value of an ace counted high.
const SOFT_ACE: u32 = 11;

/// Value of a hand with soft aces.
///
/// Non-aces count their rank (faces count 10). Each ace is then added in
/// turn as 11 if the running total stays within 21, otherwise as 1. A soft
/// ace already counted is never demoted, so `[K, A, A]` is 22.
///
/// ```
/// use rust_cardroom::cards::Card;
/// use rust_cardroom::games::blackjack::hand_value;
///
/// let hand: Vec<Card> = ["Ah", "Ad", "9c"].iter().map(|s| s.parse().unwrap()).collect();
/// assert_eq!(hand_value(&hand), 21);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u32 {
    let (aces, others): (Vec<&Card>, Vec<&Card>) = cards.iter().partition(|c| c.rank.is_ace());
    let base: u32 = others.iter().map(|c| u32::from(c.rank.value().min(10))).sum();

    aces.iter().fold(base, |total, _| {
        if total + SOFT_ACE <= BLACKJACK {
            total + SOFT_ACE
        } else {
            total + 1
        }
    })
}

/// A single blackjack round.
///
/// Players act in seat order; each turn lasts until the player stands or
/// busts. Once every player is done the driver plays the dealer with
/// `play_dealer_turn` and the round is scored.
pub struct BlackjackGame {
    state: GameState,
    config: MatchConfig,
    dealer_hand: Vec<Card>,
    /// Players whose turn is over (stood or busted).
    done: FxHashSet<PlayerId>,
    dealer_played: bool,
    winner: Option<PlayerId>,
    stacked: Option<Vec<Card>>,
}

impl BlackjackGame {
    /// Seat the table, build the shoe and deal two cards each.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        Self::build(config, None)
    }

    /// Deal from `cards` in order instead of a shuffled shoe.
    pub fn with_stacked_deck(config: MatchConfig, cards: Vec<Card>) -> Result<Self, ConfigError> {
        Self::build(config, Some(cards))
    }

    fn build(config: MatchConfig, stacked: Option<Vec<Card>>) -> Result<Self, ConfigError> {
        config.validate(GameKind::Blackjack)?;

        let mut game = Self {
            state: GameState::for_table(&config),
            config,
            dealer_hand: Vec::new(),
            done: FxHashSet::default(),
            dealer_played: false,
            winner: None,
            stacked,
        };
        game.setup_deck();
        game.deal_initial_cards();
        Ok(game)
    }

    #[must_use]
    pub fn dealer_hand(&self) -> &[Card] {
        &self.dealer_hand
    }

    #[must_use]
    pub fn dealer_value(&self) -> u32 {
        hand_value(&self.dealer_hand)
    }

    #[must_use]
    pub fn player_value(&self, id: PlayerId) -> Option<u32> {
        self.state.player(id).map(|p| hand_value(p.hand()))
    }

    /// Every seated player has stood or busted.
    #[must_use]
    pub fn all_players_done(&self) -> bool {
        self.state.players().iter().all(|p| self.done.contains(&p.id))
    }

    #[must_use]
    pub fn dealer_played(&self) -> bool {
        self.dealer_played
    }

    fn draw_one(&mut self) -> Option<Card> {
        self.state.draw(&DeckId::main(), 1).pop()
    }

    /// Hit for the current player. Returns the new hand value, or `None`
    /// when the shoe is empty.
    fn hit(&mut self, id: PlayerId) -> Option<u32> {
        let card = self.draw_one()?;
        let player = self.state.player_mut(id)?;
        player.add_to_hand([card]);
        Some(hand_value(player.hand()))
    }

    fn finish(&mut self, id: PlayerId) -> TurnStatus {
        self.done.insert(id);
        TurnStatus::Ended
    }

    /// Dealer draws while under `dealer_stands_on`.
    ///
    /// Plays at most once; later calls do nothing.
    pub fn play_dealer_turn(&mut self) {
        if self.dealer_played {
            return;
        }
        while hand_value(&self.dealer_hand) < self.config.dealer_stands_on {
            match self.draw_one() {
                Some(card) => self.dealer_hand.push(card),
                None => {
                    log::warn!("shoe exhausted while the dealer was drawing");
                    break;
                }
            }
        }
        self.dealer_played = true;
        log::debug!("dealer finishes on {}", self.dealer_value());
    }

    fn decide_winner(&self) -> Option<PlayerId> {
        let dealer = self.dealer_value();
        let mut standing = self
            .state
            .players()
            .iter()
            .map(|p| (p.id, hand_value(p.hand())))
            .filter(|&(_, value)| value <= BLACKJACK);

        if dealer > BLACKJACK {
            return standing.next().map(|(id, _)| id);
        }

        let mut best: Option<(PlayerId, u32)> = None;
        for (id, value) in standing {
            if value > dealer && best.map_or(true, |(_, top)| value > top) {
                best = Some((id, value));
            }
        }
        best.map(|(id, _)| id)
    }
}

impl CardGame for BlackjackGame {
    fn kind(&self) -> GameKind {
        GameKind::Blackjack
    }

    fn state(&self) -> &GameState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    fn setup_deck(&mut self) {
        let deck = match self.stacked.take() {
            Some(cards) => Deck::new(DeckId::main(), cards),
            None => {
                let mut shoe = Deck::shoe(DeckId::main(), self.config.shoe_decks);
                shoe.shuffle(&mut self.state.rng);
                shoe
            }
        };
        self.state.add_deck(deck);
    }

    fn deal_initial_cards(&mut self) {
        for _ in 0..INITIAL_CARDS {
            for id in self.state.player_ids() {
                self.state.deal_to(id, &DeckId::main(), 1);
            }
            if let Some(card) = self.draw_one() {
                self.dealer_hand.push(card);
            }
        }
        self.state.set_phase(GamePhase::InProgress);
    }

    fn play_turn(&mut self, action: &PlayerAction) -> Result<TurnStatus, ActionError> {
        if self.state.is_complete() {
            return Err(ActionError::GameOver);
        }
        let id = self.state.current_player_id().ok_or(ActionError::NoPlayers)?;

        if action.kind == ActionKind::Quit {
            self.state.record_action(id, action.clone());
            self.state.set_phase(GamePhase::Complete);
            return Ok(TurnStatus::Quit);
        }
        if self.done.contains(&id) {
            return Err(ActionError::TurnOver);
        }

        let status = match action.kind {
            ActionKind::Hit => match self.hit(id) {
                Some(value) if value > BLACKJACK => {
                    log::debug!("{} busts with {}", id, value);
                    self.finish(id)
                }
                Some(_) => TurnStatus::Continue,
                None => {
                    log::warn!("shoe exhausted; {} stands", id);
                    self.finish(id)
                }
            },
            ActionKind::Stand => self.finish(id),
            other => {
                return Err(ActionError::Unsupported {
                    game: GameKind::Blackjack,
                    action: other,
                })
            }
        };

        self.state.record_action(id, action.clone());
        Ok(status)
    }

    fn play_ai_turn(&mut self) -> Result<TurnStatus, ActionError> {
        let threshold = self.config.ai_stands_on;
        loop {
            let id = self.state.current_player_id().ok_or(ActionError::NoPlayers)?;
            let value = self.player_value(id).unwrap_or(0);
            let action = if value < threshold {
                PlayerAction::hit()
            } else {
                PlayerAction::stand()
            };
            match self.play_turn(&action)? {
                TurnStatus::Continue => continue,
                status => return Ok(status),
            }
        }
    }

    fn check_win_condition(&mut self) -> Option<PlayerId> {
        if self.state.is_complete() || !self.dealer_played {
            return self.winner;
        }

        self.winner = self.decide_winner();
        if let Some(id) = self.winner {
            if let Some(player) = self.state.player_mut(id) {
                player.update_score(1);
                log::info!("{} wins the hand", player.name);
            }
        } else {
            log::info!("no winner against dealer {}", self.dealer_value());
        }
        self.state.set_phase(GamePhase::Complete);
        self.winner
    }

    fn house_turn_due(&self) -> bool {
        !self.dealer_played && !self.state.is_complete() && self.all_players_done()
    }

    fn play_house_turn(&mut self) {
        self.play_dealer_turn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(codes: &[&str]) -> Vec<Card> {
        codes.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn stacked(codes: &[&str]) -> BlackjackGame {
        BlackjackGame::with_stacked_deck(MatchConfig::new(2).with_seed(5), cards(codes)).unwrap()
    }

    #[test]
    fn test_hand_values() {
        assert_eq!(hand_value(&cards(&["Ah", "Kd"])), 21);
        assert_eq!(hand_value(&cards(&["Ah", "Ad", "9c"])), 21);
        assert_eq!(hand_value(&cards(&["Kh", "Qd", "5c"])), 25);
        assert_eq!(hand_value(&cards(&["Ah", "6d", "Kc"])), 17);
        assert_eq!(hand_value(&cards(&["Ah", "Ad", "Ac", "As"])), 14);
        assert_eq!(hand_value(&[]), 0);
    }

    #[test]
    fn test_soft_ace_ignores_hand_order() {
        assert_eq!(hand_value(&cards(&["Ah", "9d", "Ac"])), 21);
        assert_eq!(hand_value(&cards(&["Ah", "5d", "Ac", "Kh"])), 17);
        // The first ace stays soft even when the second then busts the hand
        assert_eq!(hand_value(&cards(&["Kh", "Ah", "Ad"])), 22);
        assert_eq!(hand_value(&cards(&["Ad", "Kh", "Ah"])), 22);
        assert_eq!(hand_value(&cards(&["9h", "Ah", "Ad"])), 21);
    }

    #[test]
    fn test_shoe_size() {
        let game = BlackjackGame::new(MatchConfig::new(3).with_seed(1).with_shoe_decks(2)).unwrap();
        // 3 players + dealer, two cards each
        assert_eq!(game.state().deck(&DeckId::main()).unwrap().remaining(), 104 - 8);
        assert_eq!(game.dealer_hand().len(), 2);
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(matches!(
            BlackjackGame::new(MatchConfig::new(8)),
            Err(ConfigError::TooManyPlayers { max: 7, .. })
        ));
        assert!(matches!(
            BlackjackGame::new(MatchConfig::new(2).with_shoe_decks(0)),
            Err(ConfigError::InvalidShoe)
        ));
    }

    #[test]
    fn test_deal_order() {
        let game = stacked(&["Tc", "Td", "6c", "5h", "9d", "8s"]);

        assert_eq!(game.player_value(PlayerId::new(0)), Some(15));
        assert_eq!(game.player_value(PlayerId::new(1)), Some(19));
        assert_eq!(game.dealer_value(), 14);
    }

    #[test]
    fn test_hit_and_bust() {
        let mut game = stacked(&["Tc", "Td", "6c", "5h", "9d", "8s", "4h", "Kd"]);

        assert_eq!(game.play_turn(&PlayerAction::hit()), Ok(TurnStatus::Continue));
        assert_eq!(game.player_value(PlayerId::new(0)), Some(19));

        assert_eq!(game.play_turn(&PlayerAction::hit()), Ok(TurnStatus::Ended));
        assert_eq!(game.player_value(PlayerId::new(0)), Some(29));
        assert_eq!(game.play_turn(&PlayerAction::stand()), Err(ActionError::TurnOver));
    }

    #[test]
    fn test_unsupported_action() {
        let mut game = stacked(&["Tc", "Td", "6c", "5h", "9d", "8s"]);
        assert_eq!(
            game.play_turn(&PlayerAction::fold()),
            Err(ActionError::Unsupported { game: GameKind::Blackjack, action: ActionKind::Fold })
        );
        assert!(game.state().history().is_empty());
    }

    #[test]
    fn test_ai_hits_to_threshold() {
        let config = MatchConfig::new(2).all_ai().with_seed(5);
        let deck = cards(&["Tc", "Td", "6c", "5h", "9d", "8s", "2h", "3d", "Kc"]);
        let mut game = BlackjackGame::with_stacked_deck(config, deck).unwrap();

        // 15 -> 17 with the 2, then stands
        assert_eq!(game.play_ai_turn(), Ok(TurnStatus::Ended));
        assert_eq!(game.player_value(PlayerId::new(0)), Some(17));
        assert_eq!(game.state().history().len(), 2);
    }

    #[test]
    fn test_dealer_waits_for_players() {
        let mut game = stacked(&["Tc", "Td", "6c", "5h", "9d", "8s", "3s"]);
        assert!(!game.house_turn_due());

        game.play_turn(&PlayerAction::stand()).unwrap();
        game.state_mut().next_turn();
        assert!(!game.house_turn_due());
        game.play_turn(&PlayerAction::stand()).unwrap();
        assert!(game.all_players_done());
        assert!(game.house_turn_due());

        // No result until the dealer has played
        assert_eq!(game.check_win_condition(), None);
        assert!(!game.is_complete());
    }

    #[test]
    fn test_higher_hand_beats_dealer() {
        let mut game = stacked(&["Tc", "Td", "6c", "5h", "9d", "8s", "3s"]);
        game.play_turn(&PlayerAction::stand()).unwrap();
        game.state_mut().next_turn();
        game.play_turn(&PlayerAction::stand()).unwrap();

        game.play_dealer_turn();
        assert_eq!(game.dealer_value(), 17);

        assert_eq!(game.check_win_condition(), Some(PlayerId::new(1)));
        assert!(game.is_complete());
        assert_eq!(game.state().player(PlayerId::new(1)).unwrap().score(), 1);
        assert_eq!(game.play_turn(&PlayerAction::hit()), Err(ActionError::GameOver));
    }

    #[test]
    fn test_dealer_bust_rewards_first_standing_player() {
        // Dealer 16 draws a king
        let mut game = stacked(&["Tc", "Td", "6c", "5h", "9d", "Ts", "Kh"]);
        game.play_turn(&PlayerAction::stand()).unwrap();
        game.state_mut().next_turn();
        game.play_turn(&PlayerAction::stand()).unwrap();
        game.play_dealer_turn();

        assert_eq!(game.dealer_value(), 26);
        assert_eq!(game.check_win_condition(), Some(PlayerId::new(0)));
        assert_eq!(game.state().player(PlayerId::new(1)).unwrap().score(), 0);
    }

    #[test]
    fn test_tie_with_dealer_has_no_winner() {
        // Both players and the dealer hold 18
        let mut game = stacked(&["Tc", "Td", "Th", "8h", "8d", "8s"]);
        game.play_turn(&PlayerAction::stand()).unwrap();
        game.state_mut().next_turn();
        game.play_turn(&PlayerAction::stand()).unwrap();
        game.play_dealer_turn();

        assert_eq!(game.check_win_condition(), None);
        assert!(game.is_complete());
    }

    #[test]
    fn test_dealer_stops_on_empty_shoe() {
        let mut game = stacked(&["Tc", "Td", "2c", "5h", "9d", "3s"]);
        game.play_turn(&PlayerAction::stand()).unwrap();
        game.state_mut().next_turn();
        game.play_turn(&PlayerAction::stand()).unwrap();

        game.play_dealer_turn();
        assert_eq!(game.dealer_value(), 5);
        assert!(game.dealer_played());
        assert_eq!(game.check_win_condition(), Some(PlayerId::new(1)));
    }
}

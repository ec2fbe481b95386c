//! Draw-poker style betting over four stages.
//!
//! ## Stages
//!
//! `PreFlop → Flop → Turn → River → Showdown`. A stage closes once every
//! active player has acted in it and all contributions match
//! `current_bet`. The flop reveals three community cards; turn and river
//! one each. Leaving the river ends the round.
//!
//! ## Rounds
//!
//! `check_win_condition` settles a finished round: the pot goes to the
//! last player standing or the best category (first seat wins ties), broke
//! players are eliminated, and a new round is dealt. The match ends when a
//! single player has money left.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::eval::{evaluate, HandCategory};
use crate::cards::{Card, Deck, DeckId};
use crate::core::{
    ActionError, ActionKind, ConfigError, GameKind, GamePhase, GameState, MatchConfig,
    PlayerAction, PlayerId, PlayerState,
};
use crate::rules::{CardGame, TurnStatus};

const HOLE_CARDS: usize = 2;

/// Betting stage within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    PreFlop = 0,
    Flop = 1,
    Turn = 2,
    River = 3,
    Showdown = 4,
}

impl Stage {
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn next(self) -> Stage {
        match self {
            Stage::PreFlop => Stage::Flop,
            Stage::Flop => Stage::Turn,
            Stage::Turn => Stage::River,
            Stage::River | Stage::Showdown => Stage::Showdown,
        }
    }

    /// Community cards revealed on entering this stage.
    #[must_use]
    pub const fn reveals(self) -> usize {
        match self {
            Stage::Flop => 3,
            Stage::Turn | Stage::River => 1,
            Stage::PreFlop | Stage::Showdown => 0,
        }
    }
}

/// How the last round was won.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown {
    pub round: u32,
    pub winner: PlayerId,
    /// `None` when everyone else folded.
    pub category: Option<HandCategory>,
    pub pot: i64,
}

/// A poker match.
pub struct PokerGame {
    state: GameState,
    config: MatchConfig,
    pot: i64,
    current_bet: i64,
    stage: Stage,
    round_active: bool,
    community_cards: Vec<Card>,
    /// Players who have acted in the current stage.
    acted: FxHashSet<PlayerId>,
    round_number: u32,
    last_showdown: Option<Showdown>,
    eliminated: Vec<PlayerState>,
    winner: Option<PlayerId>,
    /// Deck to use instead of a shuffled one for the next deal.
    stacked: Option<Vec<Card>>,
}

impl PokerGame {
    /// Seat the table, shuffle and deal the first round.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        Self::build(config, None)
    }

    /// Like `new`, but the first round is dealt from `cards` in order:
    /// two hole cards per seat, then flop, turn and river.
    pub fn with_stacked_deck(config: MatchConfig, cards: Vec<Card>) -> Result<Self, ConfigError> {
        Self::build(config, Some(cards))
    }

    fn build(config: MatchConfig, stacked: Option<Vec<Card>>) -> Result<Self, ConfigError> {
        config.validate(GameKind::Poker)?;

        let mut state = GameState::for_table(&config);
        for player in state.players_mut() {
            player.update_bankroll(config.starting_bankroll);
        }

        let mut game = Self {
            state,
            config,
            pot: 0,
            current_bet: 0,
            stage: Stage::PreFlop,
            round_active: true,
            community_cards: Vec::new(),
            acted: FxHashSet::default(),
            round_number: 1,
            last_showdown: None,
            eliminated: Vec::new(),
            winner: None,
            stacked,
        };
        game.setup_deck();
        game.deal_initial_cards();
        Ok(game)
    }

    // === Read surface ===

    #[must_use]
    pub fn pot(&self) -> i64 {
        self.pot
    }

    #[must_use]
    pub fn current_bet(&self) -> i64 {
        self.current_bet
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// False once the round is decided and waiting to be settled.
    #[must_use]
    pub fn round_active(&self) -> bool {
        self.round_active
    }

    #[must_use]
    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn last_showdown(&self) -> Option<&Showdown> {
        self.last_showdown.as_ref()
    }

    /// Players knocked out with an empty bankroll.
    #[must_use]
    pub fn eliminated(&self) -> &[PlayerState] {
        &self.eliminated
    }

    /// Category of a seated player's hole cards plus the board.
    #[must_use]
    pub fn evaluate_player(&self, id: PlayerId) -> Option<HandCategory> {
        let player = self.state.player(id)?;
        let mut cards = player.hand().to_vec();
        cards.extend(self.community_cards.iter().cloned());
        Some(evaluate(&cards))
    }

    // === Betting ===

    fn call(&mut self, id: PlayerId) -> Result<(), ActionError> {
        let current_bet = self.current_bet;
        let player = self.state.player_mut(id).ok_or(ActionError::NoPlayers)?;

        let delta = current_bet - player.score();
        if delta > player.bankroll() {
            return Err(ActionError::InsufficientBankroll {
                needed: delta,
                available: player.bankroll(),
            });
        }

        player.update_bankroll(-delta);
        player.set_score(current_bet);
        self.pot += delta;
        Ok(())
    }

    fn raise(&mut self, id: PlayerId, amount: i64) -> Result<(), ActionError> {
        if amount <= self.current_bet {
            return Err(ActionError::RaiseTooSmall {
                amount,
                current_bet: self.current_bet,
            });
        }

        let player = self.state.player_mut(id).ok_or(ActionError::NoPlayers)?;
        let delta = amount - player.score();
        if delta > player.bankroll() {
            return Err(ActionError::InsufficientBankroll {
                needed: delta,
                available: player.bankroll(),
            });
        }

        player.update_bankroll(-delta);
        player.set_score(amount);
        self.pot += delta;
        self.current_bet = amount;
        Ok(())
    }

    fn betting_settled(&self) -> bool {
        self.state
            .players()
            .iter()
            .all(|p| self.acted.contains(&p.id) && p.score() == self.current_bet)
    }

    fn reveal(&mut self, count: usize) {
        let cards = self.state.draw(&DeckId::main(), count);
        if cards.len() < count {
            log::warn!("deck ran short: revealed {} of {} community cards", cards.len(), count);
        }
        self.community_cards.extend(cards);
    }

    fn advance_stage(&mut self) {
        for player in self.state.players_mut() {
            player.set_score(0);
        }
        self.current_bet = 0;
        self.acted.clear();

        self.stage = self.stage.next();
        self.reveal(self.stage.reveals());
        if self.stage == Stage::Showdown {
            self.round_active = false;
        }
        self.state.reset_turn_pointer();

        log::debug!(
            "round {}: entering {:?} with pot {}",
            self.round_number,
            self.stage,
            self.pot
        );
    }

    /// Decide what happens after an accepted betting action.
    fn progress(&mut self, folded: bool) -> TurnStatus {
        if self.state.player_count() <= 1 {
            self.round_active = false;
            return TurnStatus::Repositioned;
        }
        if self.betting_settled() {
            self.advance_stage();
            return TurnStatus::Repositioned;
        }
        if folded {
            TurnStatus::Repositioned
        } else {
            TurnStatus::Ended
        }
    }

    // === AI ===

    /// The built-in policy for the current player.
    ///
    /// Three of a kind or better raises by the configured increment (calling
    /// when the raise is unaffordable), a pair calls, anything else folds.
    /// A broke player always folds.
    #[must_use]
    pub fn ai_action(&self) -> PlayerAction {
        let Some(player) = self.state.current_player() else {
            return PlayerAction::fold();
        };
        if player.bankroll() == 0 {
            return PlayerAction::fold();
        }

        let category = self
            .evaluate_player(player.id)
            .unwrap_or(HandCategory::HighCard);

        if category >= HandCategory::ThreeOfAKind {
            let target = self.current_bet + self.config.raise_increment;
            if target <= player.bankroll() + player.score() {
                return PlayerAction::raise(target);
            }
        }

        let owed = self.current_bet - player.score();
        if category >= HandCategory::Pair && owed <= player.bankroll() {
            PlayerAction::call()
        } else {
            PlayerAction::fold()
        }
    }

    // === Round lifecycle ===

    fn settle_round(&mut self) {
        let contenders = self.state.players();

        let (winner, category) = if contenders.len() == 1 {
            (contenders[0].id, None)
        } else {
            let mut best: Option<(PlayerId, HandCategory)> = None;
            for player in contenders {
                let Some(category) = self.evaluate_player(player.id) else {
                    continue;
                };
                if best.map_or(true, |(_, top)| category > top) {
                    best = Some((player.id, category));
                }
            }
            match best {
                Some((id, category)) => (id, Some(category)),
                None => return,
            }
        };

        let pot = std::mem::take(&mut self.pot);
        if let Some(player) = self.state.player_mut(winner) {
            player.update_bankroll(pot);
            log::info!(
                "round {}: {} wins {} with {}",
                self.round_number,
                player.name,
                pot,
                category.map_or_else(|| "no contest".to_string(), |c| c.to_string())
            );
        }

        self.last_showdown = Some(Showdown {
            round: self.round_number,
            winner,
            category,
            pot,
        });
    }

    fn start_new_round(&mut self) {
        self.state.restore_sidelined();

        for id in self.state.player_ids() {
            let broke = self.state.player(id).is_some_and(|p| p.bankroll() <= 0);
            if broke {
                if let Some(player) = self.state.remove_player(id) {
                    log::info!("{} is out of chips", player.name);
                    self.eliminated.push(player);
                }
            }
        }

        for player in self.state.players_mut() {
            player.clear_hand();
            player.set_score(0);
        }
        self.community_cards.clear();
        self.pot = 0;
        self.current_bet = 0;
        self.stage = Stage::PreFlop;
        self.acted.clear();
        self.round_active = true;
        self.round_number += 1;

        self.state.reset_turn_pointer();
        self.setup_deck();
        self.deal_initial_cards();
    }
}

impl CardGame for PokerGame {
    fn kind(&self) -> GameKind {
        GameKind::Poker
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
        for id in self.state.player_ids() {
            self.state.deal_to(id, &DeckId::main(), HOLE_CARDS);
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
        if !self.round_active {
            return Err(ActionError::RoundOver);
        }

        let folded = match action.kind {
            ActionKind::Fold => {
                self.state.sideline_player(id);
                true
            }
            ActionKind::Call => {
                self.call(id)?;
                false
            }
            ActionKind::Raise => {
                let amount = action.amount.ok_or(ActionError::MissingAmount)?;
                self.raise(id, amount)?;
                false
            }
            other => {
                return Err(ActionError::Unsupported {
                    game: GameKind::Poker,
                    action: other,
                })
            }
        };

        self.acted.insert(id);
        self.state.record_action(id, action.clone());
        Ok(self.progress(folded))
    }

    fn play_ai_turn(&mut self) -> Result<TurnStatus, ActionError> {
        let action = self.ai_action();
        self.play_turn(&action)
    }

    fn check_win_condition(&mut self) -> Option<PlayerId> {
        if self.state.is_complete() || self.round_active {
            return self.winner;
        }

        self.settle_round();

        let solvent: Vec<PlayerId> = self
            .state
            .players()
            .iter()
            .chain(self.state.sidelined())
            .filter(|p| p.bankroll() > 0)
            .map(|p| p.id)
            .collect();

        if solvent.len() <= 1 {
            self.winner = solvent.first().copied();
            self.state.set_phase(GamePhase::Complete);
            if let Some(id) = self.winner {
                log::info!("{} wins the match after {} rounds", id, self.round_number);
            }
            return self.winner;
        }

        self.start_new_round();
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(codes: &[&str]) -> Vec<Card> {
        codes.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn table(players: usize) -> PokerGame {
        PokerGame::new(MatchConfig::new(players).with_seed(11).with_starting_bankroll(100)).unwrap()
    }

    #[test]
    fn test_new_deals_hole_cards() {
        let game = table(4);

        assert_eq!(game.phase(), GamePhase::InProgress);
        assert_eq!(game.stage(), Stage::PreFlop);
        for player in game.state().players() {
            assert_eq!(player.hand().len(), 2);
            assert_eq!(player.bankroll(), 100);
        }
        assert_eq!(game.state().deck(&DeckId::main()).unwrap().remaining(), 44);
    }

    #[test]
    fn test_rejects_too_many_players() {
        assert!(matches!(
            PokerGame::new(MatchConfig::new(11)),
            Err(ConfigError::TooManyPlayers { max: 10, .. })
        ));
        assert_eq!(
            PokerGame::new(MatchConfig::new(2).all_ai().with_raise_increment(0)).err(),
            Some(ConfigError::InvalidRaiseIncrement(0))
        );
    }

    #[test]
    fn test_call_moves_chips() {
        let mut game = table(3);
        game.play_turn(&PlayerAction::raise(30)).unwrap();
        game.state_mut().next_turn();

        let status = game.play_turn(&PlayerAction::call()).unwrap();
        assert_eq!(status, TurnStatus::Ended);

        let p1 = game.state().player(PlayerId::new(1)).unwrap();
        assert_eq!(p1.score(), 30);
        assert_eq!(p1.bankroll(), 70);
        assert_eq!(game.pot(), 60);
    }

    #[test]
    fn test_raise_validation() {
        let mut game = table(2);
        game.play_turn(&PlayerAction::raise(20)).unwrap();
        game.state_mut().next_turn();

        assert_eq!(
            game.play_turn(&PlayerAction::raise(20)),
            Err(ActionError::RaiseTooSmall { amount: 20, current_bet: 20 })
        );
        assert_eq!(
            game.play_turn(&PlayerAction::raise(101)),
            Err(ActionError::InsufficientBankroll { needed: 101, available: 100 })
        );
        assert_eq!(
            game.play_turn(&PlayerAction::new(ActionKind::Raise)),
            Err(ActionError::MissingAmount)
        );

        // Nothing moved
        assert_eq!(game.pot(), 20);
        assert_eq!(game.current_bet(), 20);
        assert_eq!(game.state().player(PlayerId::new(1)).unwrap().bankroll(), 100);
    }

    #[test]
    fn test_raise_counts_existing_contribution() {
        let mut game = table(2);
        game.play_turn(&PlayerAction::raise(40)).unwrap();
        game.state_mut().next_turn();
        game.play_turn(&PlayerAction::raise(60)).unwrap();
        game.state_mut().next_turn();

        // p0 already put in 40, so 100 total costs 60 more
        game.play_turn(&PlayerAction::raise(100)).unwrap();
        let p0 = game.state().player(PlayerId::new(0)).unwrap();
        assert_eq!(p0.bankroll(), 0);
        assert_eq!(p0.score(), 100);
        assert_eq!(game.pot(), 160);
    }

    #[test]
    fn test_unaffordable_call_rejected() {
        let mut game = PokerGame::new(MatchConfig::new(2).with_seed(3).with_starting_bankroll(50)).unwrap();
        game.state_mut().player_mut(PlayerId::new(1)).unwrap().update_bankroll(-40);

        game.play_turn(&PlayerAction::raise(30)).unwrap();
        game.state_mut().next_turn();

        assert_eq!(
            game.play_turn(&PlayerAction::call()),
            Err(ActionError::InsufficientBankroll { needed: 30, available: 10 })
        );
    }

    #[test]
    fn test_unsupported_action() {
        let mut game = table(2);
        assert_eq!(
            game.play_turn(&PlayerAction::hit()),
            Err(ActionError::Unsupported { game: GameKind::Poker, action: ActionKind::Hit })
        );
    }

    #[test]
    fn test_stage_advances_when_bets_match() {
        let mut game = table(3);

        game.play_turn(&PlayerAction::raise(20)).unwrap();
        game.state_mut().next_turn();
        game.play_turn(&PlayerAction::call()).unwrap();
        game.state_mut().next_turn();
        assert_eq!(game.stage(), Stage::PreFlop);

        let status = game.play_turn(&PlayerAction::call()).unwrap();
        assert_eq!(status, TurnStatus::Repositioned);
        assert_eq!(game.stage(), Stage::Flop);
        assert_eq!(game.current_bet(), 0);
        assert_eq!(game.community_cards().len(), 3);
        assert_eq!(game.state().current_player_index(), 0);
        assert!(game.state().players().iter().all(|p| p.score() == 0));
        assert_eq!(game.pot(), 60);
    }

    #[test]
    fn test_stage_waits_for_everyone_to_act() {
        let mut game = table(3);

        // Checking around: bets already match, but p1 and p2 have not acted
        assert_eq!(game.play_turn(&PlayerAction::call()).unwrap(), TurnStatus::Ended);
        assert_eq!(game.stage(), Stage::PreFlop);
    }

    #[test]
    fn test_full_round_to_showdown() {
        let mut game = table(2);

        for expected in [Stage::Flop, Stage::Turn, Stage::River, Stage::Showdown] {
            game.play_turn(&PlayerAction::call()).unwrap();
            game.state_mut().next_turn();
            game.play_turn(&PlayerAction::call()).unwrap();
            assert_eq!(game.stage(), expected);
        }

        assert_eq!(game.community_cards().len(), 5);
        assert!(!game.round_active());
        assert_eq!(game.play_turn(&PlayerAction::call()), Err(ActionError::RoundOver));
    }

    #[test]
    fn test_fold_leaves_single_player() {
        let mut game = table(2);
        game.play_turn(&PlayerAction::raise(10)).unwrap();
        game.state_mut().next_turn();

        let status = game.play_turn(&PlayerAction::fold()).unwrap();
        assert_eq!(status, TurnStatus::Repositioned);
        assert!(!game.round_active());
        assert_eq!(game.state().player_count(), 1);

        assert_eq!(game.check_win_condition(), None);
        let showdown = game.last_showdown().unwrap();
        assert_eq!(showdown.winner, PlayerId::new(0));
        assert_eq!(showdown.category, None);
        assert_eq!(showdown.pot, 10);

        // New round: both back, bankrolls carried over
        assert_eq!(game.round_number(), 2);
        assert!(game.round_active());
        assert_eq!(game.state().player_count(), 2);
        assert_eq!(game.state().player(PlayerId::new(0)).unwrap().bankroll(), 100);
        assert_eq!(game.state().player(PlayerId::new(0)).unwrap().hand().len(), 2);
        assert_eq!(game.pot(), 0);
    }

    #[test]
    fn test_showdown_best_category_wins() {
        // p0: pair of kings, p1: trip twos on the board
        let deck = cards(&["Kh", "Kd", "2h", "2d", "2s", "9c", "7d", "4h", "3c"]);
        let mut game =
            PokerGame::with_stacked_deck(MatchConfig::new(2).with_seed(1).with_starting_bankroll(100), deck)
                .unwrap();

        for _ in 0..4 {
            game.play_turn(&PlayerAction::call()).unwrap();
            game.state_mut().next_turn();
            game.play_turn(&PlayerAction::call()).unwrap();
        }
        assert_eq!(game.evaluate_player(PlayerId::new(0)), Some(HandCategory::Pair));
        assert_eq!(game.evaluate_player(PlayerId::new(1)), Some(HandCategory::ThreeOfAKind));

        game.check_win_condition();
        let showdown = game.last_showdown().unwrap();
        assert_eq!(showdown.winner, PlayerId::new(1));
        assert_eq!(showdown.category, Some(HandCategory::ThreeOfAKind));
    }

    #[test]
    fn test_tie_goes_to_first_seat() {
        // Both make nines and threes; no kickers decide it
        let deck = cards(&["Ah", "3d", "Ac", "3h", "9c", "9d", "3s", "Qh", "5c"]);
        let mut game =
            PokerGame::with_stacked_deck(MatchConfig::new(2).with_seed(1).with_starting_bankroll(100), deck)
                .unwrap();

        game.play_turn(&PlayerAction::raise(10)).unwrap();
        game.state_mut().next_turn();
        game.play_turn(&PlayerAction::call()).unwrap();
        for _ in 0..3 {
            game.play_turn(&PlayerAction::call()).unwrap();
            game.state_mut().next_turn();
            game.play_turn(&PlayerAction::call()).unwrap();
        }

        game.check_win_condition();
        let showdown = game.last_showdown().unwrap();
        assert_eq!(showdown.category, Some(HandCategory::TwoPair));
        assert_eq!(showdown.winner, PlayerId::new(0));
        assert_eq!(game.state().player(PlayerId::new(0)).unwrap().bankroll(), 110);
    }

    #[test]
    fn test_match_ends_when_one_player_solvent() {
        let mut game = table(2);
        game.play_turn(&PlayerAction::raise(100)).unwrap();
        game.state_mut().next_turn();
        game.play_turn(&PlayerAction::call()).unwrap();

        // Both all in; check the rest of the way down
        while game.round_active() {
            game.play_turn(&PlayerAction::call()).unwrap();
            game.state_mut().next_turn();
            game.play_turn(&PlayerAction::call()).unwrap();
        }

        let winner = game.check_win_condition();
        let showdown = game.last_showdown().unwrap().clone();
        assert_eq!(winner, Some(showdown.winner));
        assert!(game.is_complete());
        assert_eq!(game.check_win_condition(), Some(showdown.winner));
        assert_eq!(game.play_turn(&PlayerAction::call()), Err(ActionError::GameOver));
    }

    #[test]
    fn test_broke_player_eliminated_next_round() {
        let mut game = table(3);
        game.state_mut().player_mut(PlayerId::new(2)).unwrap().update_bankroll(-100);

        game.play_turn(&PlayerAction::fold()).unwrap();
        game.play_turn(&PlayerAction::fold()).unwrap();
        assert!(!game.round_active());

        assert_eq!(game.check_win_condition(), None);
        assert_eq!(game.eliminated().len(), 1);
        assert_eq!(game.eliminated()[0].id, PlayerId::new(2));
        assert_eq!(game.state().player_ids(), vec![PlayerId::new(0), PlayerId::new(1)]);
    }

    #[test]
    fn test_ai_policy() {
        // p0 holds trips with the board after the flop, p1 holds nothing
        let deck = cards(&["9h", "9d", "2c", "7s", "9s", "Kd", "4h", "Jc", "3d"]);
        let config = MatchConfig::new(2).all_ai().with_seed(1).with_starting_bankroll(100);
        let mut game = PokerGame::with_stacked_deck(config, deck).unwrap();

        // Pre-flop: pair of nines calls
        assert_eq!(game.ai_action(), PlayerAction::call());
        game.play_ai_turn().unwrap();
        game.state_mut().next_turn();

        // High card folds
        assert_eq!(game.ai_action(), PlayerAction::fold());
    }

    #[test]
    fn test_ai_raises_strong_hands() {
        let deck = cards(&["9h", "9d", "2c", "7s", "9s", "Kd", "4h", "Jc", "3d"]);
        let config = MatchConfig::new(2).all_ai().with_seed(1).with_starting_bankroll(100);
        let mut game = PokerGame::with_stacked_deck(config, deck).unwrap();

        game.play_turn(&PlayerAction::call()).unwrap();
        game.state_mut().next_turn();
        game.play_turn(&PlayerAction::call()).unwrap();
        assert_eq!(game.stage(), Stage::Flop);

        assert_eq!(game.ai_action(), PlayerAction::raise(10));

        // Cannot cover the raise: falls back to a call
        game.state_mut().player_mut(PlayerId::new(0)).unwrap().update_bankroll(-95);
        assert_eq!(game.ai_action(), PlayerAction::call());

        // Broke: folds
        game.state_mut().player_mut(PlayerId::new(0)).unwrap().update_bankroll(-5);
        assert_eq!(game.ai_action(), PlayerAction::fold());
    }

    #[test]
    fn test_quit_completes_match() {
        let mut game = table(2);
        assert_eq!(game.play_turn(&PlayerAction::quit()), Ok(TurnStatus::Quit));
        assert!(game.is_complete());
        assert_eq!(game.check_win_condition(), None);
    }
}

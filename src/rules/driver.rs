//! Match driving helpers.
//!
//! The games never advance their own turn pointer after a normal turn.
//! A driver submits an action, then hands the returned `TurnStatus` to
//! `settle`, which moves the pointer, lets the house act when due, and
//! checks for a winner.

use crate::core::{ActionError, ConfigError, GameKind, MatchConfig, PlayerId};
use crate::games::{BlackjackGame, PokerGame, RummyGame};

use super::engine::{CardGame, TurnStatus};

/// Build any bundled game behind the `CardGame` trait.
///
/// ```
/// use rust_cardroom::core::{GameKind, MatchConfig};
/// use rust_cardroom::rules::driver::new_game;
///
/// let game = new_game(GameKind::Rummy, MatchConfig::new(3).with_seed(1)).unwrap();
/// assert_eq!(game.state().player_count(), 3);
/// ```
pub fn new_game(kind: GameKind, config: MatchConfig) -> Result<Box<dyn CardGame>, ConfigError> {
    log::debug!("starting {} for {} players", kind, config.player_count);
    Ok(match kind {
        GameKind::Poker => Box::new(PokerGame::new(config)?),
        GameKind::Blackjack => Box::new(BlackjackGame::new(config)?),
        GameKind::Rummy => Box::new(RummyGame::new(config)?),
    })
}

/// Finish handling an accepted action.
///
/// Returns the match winner once there is one.
pub fn settle(game: &mut dyn CardGame, status: TurnStatus) -> Option<PlayerId> {
    if status == TurnStatus::Quit {
        log::info!("{} ended by a player quitting", game.kind());
        return None;
    }
    if status.advances_pointer() {
        game.state_mut().next_turn();
    }
    if game.house_turn_due() {
        game.play_house_turn();
    }
    game.check_win_condition()
}

/// Play AI turns until a human is to act, the match is over, or
/// `max_turns` AI turns have been played.
///
/// Returns the winner if the match ended with one.
pub fn run_ai_turns(game: &mut dyn CardGame, max_turns: usize) -> Result<Option<PlayerId>, ActionError> {
    for _ in 0..max_turns {
        if game.is_complete() || !game.current_is_ai() {
            break;
        }
        let status = game.play_ai_turn()?;
        if let Some(winner) = settle(game, status) {
            return Ok(Some(winner));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GamePhase, PlayerAction};

    #[test]
    fn test_new_game_kinds() {
        for kind in [GameKind::Poker, GameKind::Blackjack, GameKind::Rummy] {
            let game = new_game(kind, MatchConfig::new(2).with_seed(3)).unwrap();
            assert_eq!(game.kind(), kind);
            assert_eq!(game.phase(), GamePhase::InProgress);
        }
    }

    #[test]
    fn test_new_game_rejects_table() {
        assert!(matches!(
            new_game(GameKind::Blackjack, MatchConfig::new(1)),
            Err(ConfigError::TooFewPlayers { .. })
        ));
    }

    #[test]
    fn test_settle_moves_pointer_only_on_ended() {
        let mut game = new_game(GameKind::Rummy, MatchConfig::new(3).with_seed(8)).unwrap();

        let status = game.play_turn(&PlayerAction::draw_deck()).unwrap();
        assert_eq!(settle(game.as_mut(), status), None);
        assert_eq!(game.state().current_player_index(), 0);

        let card = game.current_player().unwrap().hand()[0].clone();
        let status = game.play_turn(&PlayerAction::discard(card)).unwrap();
        settle(game.as_mut(), status);
        assert_eq!(game.state().current_player_index(), 1);
    }

    #[test]
    fn test_settle_quit() {
        let mut game = new_game(GameKind::Poker, MatchConfig::new(2).with_seed(3)).unwrap();
        let status = game.play_turn(&PlayerAction::quit()).unwrap();

        assert_eq!(settle(game.as_mut(), status), None);
        assert!(game.is_complete());
        assert_eq!(game.state().current_player_index(), 0);
    }

    #[test]
    fn test_run_ai_stops_at_human_seat() {
        let mut game = new_game(GameKind::Rummy, MatchConfig::new(3).with_seed(8)).unwrap();
        assert!(!game.current_is_ai());

        assert_eq!(run_ai_turns(game.as_mut(), 10), Ok(None));
        assert!(game.state().history().is_empty());
    }

    #[test]
    fn test_blackjack_all_ai_finishes() {
        let config = MatchConfig::new(4).all_ai().with_seed(21);
        let mut game = new_game(GameKind::Blackjack, config).unwrap();

        run_ai_turns(game.as_mut(), 10).unwrap();
        assert!(game.is_complete());
    }
}

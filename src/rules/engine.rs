//! The trait every game implements.
//!
//! Games implement `CardGame` to define their rules:
//! - How the deck is built and the opening hands dealt
//! - How one submitted action changes the state
//! - What the built-in AI does on its turn
//! - When someone has won
//!
//! Drivers never interpret game-specific state; they hand actions to the
//! current player's game and settle the turn with `rules::driver::settle`.

use crate::core::{ActionError, GameKind, GamePhase, GameState, PlayerAction, PlayerId, PlayerState};

/// What the driver should do after an accepted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    /// The same player acts again.
    Continue,
    /// The player's turn is over; advance the turn pointer.
    Ended,
    /// The game already moved the turn pointer (fold, new stage, round
    /// over). Do not advance it again.
    Repositioned,
    /// The player quit; the match is complete.
    Quit,
}

impl TurnStatus {
    /// Whether the driver should call `GameState::next_turn`.
    #[must_use]
    pub fn advances_pointer(self) -> bool {
        self == TurnStatus::Ended
    }
}

/// Game rules over a shared `GameState`.
///
/// ## Implementation Notes
///
/// - `play_turn`: acts for the current player; a rejected action must leave
///   the state unchanged
/// - `play_ai_turn`: plays the current player's whole turn
/// - `check_win_condition`: may close out a round; return `Some` only when
///   the match has a winner
pub trait CardGame {
    /// Which game this is.
    fn kind(&self) -> GameKind;

    fn state(&self) -> &GameState;

    fn state_mut(&mut self) -> &mut GameState;

    /// Build and shuffle the deck(s) this game plays with.
    fn setup_deck(&mut self);

    /// Deal opening hands and move the match to `InProgress`.
    fn deal_initial_cards(&mut self);

    /// Apply one action for the current player.
    fn play_turn(&mut self, action: &PlayerAction) -> Result<TurnStatus, ActionError>;

    /// Let the built-in AI play the current player's turn.
    fn play_ai_turn(&mut self) -> Result<TurnStatus, ActionError>;

    /// Check for a match winner.
    fn check_win_condition(&mut self) -> Option<PlayerId>;

    /// Whether a seatless participant (the blackjack dealer) should act now.
    fn house_turn_due(&self) -> bool {
        false
    }

    /// Play the seatless participant's turn. Drivers call this once
    /// `house_turn_due` reports true.
    fn play_house_turn(&mut self) {}

    // === Convenience Methods ===

    fn phase(&self) -> GamePhase {
        self.state().phase()
    }

    fn is_complete(&self) -> bool {
        self.state().is_complete()
    }

    fn current_player(&self) -> Option<&PlayerState> {
        self.state().current_player()
    }

    /// Whether the current seat is driven by the built-in AI.
    fn current_is_ai(&self) -> bool {
        self.current_player().is_some_and(|p| !p.human)
    }
}

//! Core engine types: players, state, actions, RNG, configuration, errors.
//!
//! This module contains the building blocks every game shares. Games keep
//! their own extra state (pot, dealer hand, melds) next to a `GameState`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionKind, ActionRecord, PlayerAction};
pub use config::{GameKind, MatchConfig};
pub use error::{ActionError, CardError, ConfigError};
pub use player::{PlayerId, PlayerState};
pub use rng::GameRng;
pub use state::{GamePhase, GameState};

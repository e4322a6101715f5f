//! Core engine types: players, RNG, configuration, commands, turn state.
//!
//! These are the building blocks the board, rules and match engine share.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{InvalidSeat, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{MatchSetup, HERO_STARTING_HEALTH, MAX_MANA_PER_ROUND, ROW_COUNT, ROW_LENGTH};
pub use action::{Command, CommandRecord, Coordinates};
pub use state::{MatchPhase, TurnState};

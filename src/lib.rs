//! # card-duel
//!
//! A two-player, turn-based card battle engine on a fixed four-row board.
//!
//! Each player has a hero and a deck of minions. Players alternate turns,
//! place minions, attack, and trigger minion and hero abilities until one
//! hero's health reaches zero.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: Every mutating command is checked by the
//!    `Validator` against a stable snapshot. A rejected command never
//!    touches state; an accepted one is applied without further checks.
//!
//! 2. **Closed ability catalogue**: Abilities are resolved from card names
//!    once, at construction, into enums and dispatched by exhaustive match.
//!
//! 3. **Explicit session**: Cross-match counters live in a `Session` that
//!    is moved into a `Match` and handed back afterwards.
//!
//! ## Architecture
//!
//! - **Deterministic setup**: Decks are shuffled with a seeded ChaCha8 RNG,
//!   so a setup plus a command sequence always replays identically.
//!
//! - **Persistent history**: Accepted commands are kept in an `im::Vector`
//!   for cheap snapshots.
//!
//! - **No I/O**: Commands come in typed; outcomes go out to a `ResultSink`.
//!   Diagnostics go through the `log` facade.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, match setup, commands, turn counters
//! - `cards`: Card data, ability catalogue, minions and heroes
//! - `board`: Rows and the four-slot board
//! - `rules`: Rejections, the validator, the `RulesEngine` trait
//! - `game`: Players, the match engine, session, outcomes

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng,
    MatchSetup,
    Command, CommandRecord, Coordinates,
    MatchPhase, TurnState,
};

pub use crate::cards::{
    CardData, DeckList, DeckPool,
    MinionAbility, HeroAbility, RowEffect, TargetSide,
    Minion, Hero, CardRef,
};

pub use crate::board::{Board, Row, RowKind, RowSlot};

pub use crate::rules::{RulesEngine, GameResult, Rejection, SetupError, Validator};

pub use crate::game::{
    Player, Match, Session,
    Outcome, Projection, CardView, HeroView, ResultSink,
};

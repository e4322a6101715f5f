//! Match orchestration: players, the engine, session counters and outcomes.
//!
//! ## Key Types
//!
//! - `Player`: Mana, deck, hand and hero for one match
//! - `Match`: Turn/round state machine; validates then applies commands
//! - `Session`: Wins and games played across matches
//! - `Outcome` / `Projection`: What the result sink receives

pub mod engine;
pub mod outcome;
pub mod player;
pub mod session;

pub use engine::Match;
pub use outcome::{CardView, HeroView, Outcome, Projection, ResultSink};
pub use player::Player;
pub use session::Session;

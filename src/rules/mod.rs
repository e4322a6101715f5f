//! Rules layer: rejection taxonomy, pre-condition checks and the engine trait.
//!
//! Every mutating command goes through the `Validator` before the match
//! engine touches any state. The `Validator` is the only place a command is
//! rejected; `RulesEngine::apply` assumes a legal command.

pub mod engine;
pub mod error;
pub mod validator;

pub use engine::{GameResult, RulesEngine};
pub use error::{Rejection, SetupError};
pub use validator::Validator;

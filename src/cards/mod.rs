//! Card system: shared data, ability catalogue, runtime minions and heroes.
//!
//! ## Key Types
//!
//! - `CardData`: Attributes every card carries
//! - `DeckPool`: Deck lists per player, selected by index
//! - `MinionAbility` / `HeroAbility`: Closed, name-keyed ability catalogue
//! - `Minion` / `Hero`: Runtime cards with their variant-specific state
//! - `CardRef`: Tagged variant over both kinds

pub mod ability;
pub mod definition;
pub mod instance;

pub use ability::{HeroAbility, MinionAbility, RowEffect, TargetSide};
pub use definition::{CardData, DeckList, DeckPool};
pub use instance::{CardRef, Hero, Minion};

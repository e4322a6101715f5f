//! Rejection reasons and setup errors.
//!
//! Every rule violation is a `Rejection`: reported per command, never fatal,
//! and raised before any state is touched. The `Display` text is the
//! human-readable reason; the fields carry the offending identifiers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Coordinates, PlayerId};

/// A command refused by the validator.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Rejection {
    #[error("Invalid hand index")]
    InvalidHandIndex { hand_idx: usize },

    #[error("Not enough mana to place card on table.")]
    NotEnoughManaToPlace { hand_idx: usize },

    #[error("Cannot place card on table since row is full")]
    RowFull { row: usize },

    #[error("No card available at that position.")]
    NoCardAtPosition { at: Coordinates },

    #[error("Invalid attacker card.")]
    InvalidAttacker { at: Coordinates },

    #[error("Attacked card does not belong to the enemy.")]
    TargetNotEnemy { at: Coordinates },

    #[error("Attacked card does not belong to the current player.")]
    TargetNotAlly { at: Coordinates },

    #[error("Attacker card has already attacked this turn.")]
    AlreadyAttacked { at: Coordinates },

    #[error("Attacker card is frozen.")]
    AttackerFrozen { at: Coordinates },

    #[error("Attacked card is not of type 'Tank'.")]
    NotTank { at: Option<Coordinates> },

    #[error("Not enough mana to use hero's ability.")]
    NotEnoughManaForHero { affected_row: usize },

    #[error("Hero has already attacked this turn.")]
    HeroAlreadyActed { affected_row: usize },

    #[error("Selected row does not belong to the enemy.")]
    RowNotEnemy { affected_row: usize },

    #[error("Selected row does not belong to the current player.")]
    RowNotOwn { affected_row: usize },

    #[error("Invalid row index.")]
    InvalidRow { affected_row: usize },
}

impl Rejection {
    /// Human-readable reason.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Match setup failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("{player} has no deck at index {index}")]
    UnknownDeck { player: PlayerId, index: usize },
}

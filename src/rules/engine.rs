//! Rules engine trait.
//!
//! The match engine implements `RulesEngine` to split every command into a
//! pure check and an unconditional mutation:
//! - `validate` decides legality against the current state
//! - `apply` performs the mutation, assuming `validate` passed
//! - `is_terminal` reports whether a hero has died

use super::error::Rejection;
use crate::core::{Command, PlayerId};

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The player whose side killed the enemy hero.
    Winner(PlayerId),
}

impl GameResult {
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        match self {
            GameResult::Winner(p) => *p,
        }
    }

    /// Announcement for the result sink.
    #[must_use]
    pub fn message(&self) -> String {
        match self.winner() {
            PlayerId::ONE => "Player one killed the enemy hero.".to_string(),
            _ => "Player two killed the enemy hero.".to_string(),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate` must not mutate; a rejected command leaves state untouched
/// - `apply` never re-checks preconditions
/// - `is_terminal`: Return None while the match continues
pub trait RulesEngine {
    /// What an applied command reports back.
    type Output;

    /// Check a command for the current player.
    fn validate(&self, command: &Command) -> Result<(), Rejection>;

    /// Apply a validated command.
    fn apply(&mut self, command: &Command) -> Self::Output;

    /// Check if the match is over.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Validate, then apply. Nothing is mutated on rejection.
    fn execute(&mut self, command: &Command) -> Result<Self::Output, Rejection> {
        self.validate(command)?;
        Ok(self.apply(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_winner() {
        let result = GameResult::Winner(PlayerId::TWO);
        assert_eq!(result.winner(), PlayerId::TWO);
    }

    #[test]
    fn test_game_result_message() {
        assert_eq!(
            GameResult::Winner(PlayerId::ONE).message(),
            "Player one killed the enemy hero."
        );
        assert_eq!(
            GameResult::Winner(PlayerId::TWO).message(),
            "Player two killed the enemy hero."
        );
    }

    struct Counter {
        value: u32,
    }

    impl RulesEngine for Counter {
        type Output = u32;

        fn validate(&self, command: &Command) -> Result<(), Rejection> {
            match command {
                Command::PlaceCard { hand_idx } if *hand_idx > 0 => {
                    Err(Rejection::InvalidHandIndex { hand_idx: *hand_idx })
                }
                _ => Ok(()),
            }
        }

        fn apply(&mut self, _command: &Command) -> u32 {
            self.value += 1;
            self.value
        }

        fn is_terminal(&self) -> Option<GameResult> {
            None
        }
    }

    #[test]
    fn test_execute_skips_apply_on_rejection() {
        let mut engine = Counter { value: 0 };

        assert_eq!(engine.execute(&Command::PlaceCard { hand_idx: 0 }), Ok(1));
        assert_eq!(
            engine.execute(&Command::PlaceCard { hand_idx: 2 }),
            Err(Rejection::InvalidHandIndex { hand_idx: 2 })
        );
        assert_eq!(engine.value, 1);
        assert!(engine.is_terminal().is_none());
    }
}

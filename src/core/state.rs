//! Turn and round progression.
//!
//! ## TurnState
//!
//! The counters that, together with the board and players, fully describe
//! where a match is:
//! - `current_player`: whose turn it is
//! - `round`: rounds started so far (starts at 0, first round is 1)
//! - `turn`: turns ended so far (two ended turns = one round)
//!
//! ## MatchPhase
//!
//! `NotStarted → InProgress → Ended`. There are no substates beyond the
//! counters.

use serde::{Deserialize, Serialize};

use super::config::MAX_MANA_PER_ROUND;
use super::player::PlayerId;

/// Lifecycle of a single match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Created, first round not yet started.
    #[default]
    NotStarted,
    /// Rounds are being played.
    InProgress,
    /// A hero died; `winner` killed it.
    Ended { winner: PlayerId },
}

/// Active player and round/turn counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Player whose turn it is.
    pub current_player: PlayerId,

    /// Rounds started so far.
    pub round: u32,

    /// Turns ended so far.
    pub turn: u32,
}

impl TurnState {
    /// Counters before the first round, with `starting` to act.
    #[must_use]
    pub fn new(starting: PlayerId) -> Self {
        Self {
            current_player: starting,
            round: 0,
            turn: 0,
        }
    }

    /// Hand the turn to the other player.
    pub fn flip(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Increment the round counter and return the mana each player gains.
    pub fn begin_round(&mut self) -> u32 {
        self.round += 1;
        self.mana_for_round()
    }

    /// Mana granted to each player in the current round.
    #[must_use]
    pub fn mana_for_round(&self) -> u32 {
        self.round.min(MAX_MANA_PER_ROUND)
    }

    /// Count an ended turn and flip the active player.
    ///
    /// Returns true when a new round is due (every second ended turn).
    pub fn end_turn(&mut self) -> bool {
        self.turn += 1;
        self.flip();
        self.turn % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_turn_state() {
        let state = TurnState::new(PlayerId::TWO);

        assert_eq!(state.current_player, PlayerId::TWO);
        assert_eq!(state.round, 0);
        assert_eq!(state.turn, 0);
    }

    #[test]
    fn test_begin_round_caps_mana() {
        let mut state = TurnState::new(PlayerId::ONE);

        let grants: Vec<u32> = (0..12).map(|_| state.begin_round()).collect();

        assert_eq!(grants, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10]);
        assert_eq!(state.round, 12);
    }

    #[test]
    fn test_end_turn_parity() {
        let mut state = TurnState::new(PlayerId::ONE);

        assert!(!state.end_turn());
        assert_eq!(state.current_player, PlayerId::TWO);

        assert!(state.end_turn());
        assert_eq!(state.current_player, PlayerId::ONE);
        assert_eq!(state.turn, 2);
    }

    #[test]
    fn test_phase_default() {
        assert_eq!(MatchPhase::default(), MatchPhase::NotStarted);
    }
}

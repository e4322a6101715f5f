//! Counters that outlive a single match.
//!
//! A `Session` starts at zero, is moved into each `Match` it hosts and comes
//! back out when the match is done. Nothing else carries over between
//! matches.

use log::info;
use serde::{Deserialize, Serialize};

use super::engine::Match;
use super::outcome::ResultSink;
use crate::cards::DeckPool;
use crate::core::{Command, MatchSetup, PlayerId, PlayerMap};
use crate::rules::SetupError;

/// Wins per player and games played.
///
/// ## Example
///
/// ```
/// use card_duel::game::Session;
/// use card_duel::core::PlayerId;
///
/// let mut session = Session::new();
/// session.record_win(PlayerId::TWO);
///
/// assert_eq!(session.wins(PlayerId::TWO), 1);
/// assert_eq!(session.total_games(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    wins: PlayerMap<u32>,
    total_games: u32,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn wins(&self, player: PlayerId) -> u32 {
        self.wins[player]
    }

    #[must_use]
    pub fn total_games(&self) -> u32 {
        self.total_games
    }

    /// Count a finished game won by `player`.
    pub fn record_win(&mut self, player: PlayerId) {
        self.wins[player] += 1;
        self.total_games += 1;
    }

    /// Play one match from setup to the last command.
    ///
    /// Every command produces outcomes in `sink`. The match does not stop
    /// accepting commands when a hero dies; later commands are still
    /// answered but never count another win.
    pub fn play<I>(
        self,
        decks: &DeckPool,
        setup: &MatchSetup,
        commands: I,
        sink: &mut impl ResultSink,
    ) -> Result<Session, SetupError>
    where
        I: IntoIterator<Item = Command>,
    {
        let mut game = Match::start(self, decks, setup)?;
        for command in commands {
            game.dispatch(command, sink);
        }
        info!(
            "session after match: {} games, wins {}/{}",
            game.session().total_games(),
            game.session().wins(PlayerId::ONE),
            game.session().wins(PlayerId::TWO)
        );
        Ok(game.into_session())
    }
}

//! Match configuration and rule constants.
//!
//! A host configures a match by providing a `MatchSetup`:
//! - which deck list each player uses (by index into their deck pool)
//! - each player's hero card
//! - the shuffle seed applied to both decks
//! - which player acts first
//!
//! The rule constants below are fixed by the game and not configurable.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::CardData;

/// Positions per board row.
pub const ROW_LENGTH: usize = 5;

/// Rows on the board (two per player).
pub const ROW_COUNT: usize = 4;

/// Ceiling on the mana granted at the start of a single round.
pub const MAX_MANA_PER_ROUND: u32 = 10;

/// Health every hero starts a match with.
pub const HERO_STARTING_HEALTH: i32 = 30;

/// Everything needed to start one match.
///
/// ## Example
///
/// ```
/// use card_duel::cards::CardData;
/// use card_duel::core::{MatchSetup, PlayerId};
///
/// let setup = MatchSetup::new(
///     CardData::new("Lord Royce", 4, 0, 30),
///     CardData::new("King Mudface", 2, 0, 30),
/// )
/// .with_decks(0, 1)
/// .with_seed(42)
/// .with_starting_player(PlayerId::TWO);
///
/// assert_eq!(setup.deck_index(PlayerId::TWO), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSetup {
    /// Deck list index for player one.
    pub player_one_deck_idx: usize,

    /// Deck list index for player two.
    pub player_two_deck_idx: usize,

    /// Hero card for player one.
    pub player_one_hero: CardData,

    /// Hero card for player two.
    pub player_two_hero: CardData,

    /// Seed for the Fisher–Yates deck shuffle.
    pub shuffle_seed: u64,

    /// Player who takes the first turn, as a 0-based seat on the wire
    /// (0 is player one, 1 is player two).
    pub starting_player: PlayerId,
}

impl MatchSetup {
    /// Create a setup with the given heroes, first deck lists, seed 0 and
    /// player one starting.
    pub fn new(player_one_hero: CardData, player_two_hero: CardData) -> Self {
        Self {
            player_one_deck_idx: 0,
            player_two_deck_idx: 0,
            player_one_hero,
            player_two_hero,
            shuffle_seed: 0,
            starting_player: PlayerId::ONE,
        }
    }

    /// Select deck lists by index.
    #[must_use]
    pub fn with_decks(mut self, player_one: usize, player_two: usize) -> Self {
        self.player_one_deck_idx = player_one;
        self.player_two_deck_idx = player_two;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = seed;
        self
    }

    /// Set the player who acts first.
    #[must_use]
    pub fn with_starting_player(mut self, player: PlayerId) -> Self {
        self.starting_player = player;
        self
    }

    /// Deck list index for a player.
    #[must_use]
    pub fn deck_index(&self, player: PlayerId) -> usize {
        match player {
            PlayerId::ONE => self.player_one_deck_idx,
            _ => self.player_two_deck_idx,
        }
    }

    /// Hero card for a player.
    #[must_use]
    pub fn hero(&self, player: PlayerId) -> &CardData {
        match player {
            PlayerId::ONE => &self.player_one_hero,
            _ => &self.player_two_hero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> MatchSetup {
        MatchSetup::new(
            CardData::new("Lord Royce", 4, 0, 30),
            CardData::new("General Kocioraw", 2, 0, 30),
        )
    }

    #[test]
    fn test_defaults() {
        let setup = setup();

        assert_eq!(setup.deck_index(PlayerId::ONE), 0);
        assert_eq!(setup.deck_index(PlayerId::TWO), 0);
        assert_eq!(setup.shuffle_seed, 0);
        assert_eq!(setup.starting_player, PlayerId::ONE);
    }

    #[test]
    fn test_builder_chain() {
        let setup = setup()
            .with_decks(2, 3)
            .with_seed(99)
            .with_starting_player(PlayerId::TWO);

        assert_eq!(setup.deck_index(PlayerId::ONE), 2);
        assert_eq!(setup.deck_index(PlayerId::TWO), 3);
        assert_eq!(setup.shuffle_seed, 99);
        assert_eq!(setup.starting_player, PlayerId::TWO);
        assert_eq!(setup.hero(PlayerId::TWO).name, "General Kocioraw");
    }

    #[test]
    fn test_setup_serialization_uses_camel_case() {
        let setup = setup().with_seed(7);
        let json = serde_json::to_string(&setup).unwrap();

        assert!(json.contains("\"shuffleSeed\":7"));
        assert!(json.contains("\"playerOneHero\""));

        let deserialized: MatchSetup = serde_json::from_str(&json).unwrap();
        assert_eq!(setup, deserialized);
    }

    #[test]
    fn test_setup_rejects_third_starting_seat() {
        let mut value = serde_json::to_value(setup()).unwrap();
        assert_eq!(value["startingPlayer"], 0);

        value["startingPlayer"] = serde_json::json!(2);
        assert!(serde_json::from_value::<MatchSetup>(value).is_err());
    }
}

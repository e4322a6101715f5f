//! Card data - the attributes every card shares.
//!
//! `CardData` is what the loading layer hands over for each deck entry and
//! hero: name, mana cost, attack, health, description and color tags. The
//! runtime `Minion` and `Hero` wrap it with their variant-specific state.
//!
//! The name is significant: abilities and the tank/druid flags are keyed
//! off exact name matches when a runtime card is built.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Shared card attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub name: String,

    #[serde(rename = "mana")]
    pub mana_cost: u32,

    #[serde(default)]
    pub attack_damage: u32,

    #[serde(default)]
    pub health: i32,

    #[serde(default)]
    pub description: String,

    /// Display-only color tags, in order.
    #[serde(default)]
    pub colors: Vec<String>,
}

impl CardData {
    /// Create card data with an empty description and no colors.
    pub fn new(name: impl Into<String>, mana_cost: u32, attack_damage: u32, health: i32) -> Self {
        Self {
            name: name.into(),
            mana_cost,
            attack_damage,
            health,
            description: String::new(),
            colors: Vec::new(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the color tags.
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }
}

/// One deck: an ordered list of minion cards.
pub type DeckList = Vec<CardData>;

/// The deck lists available to each player, selected by index at match start.
///
/// ```
/// use card_duel::cards::{CardData, DeckPool};
/// use card_duel::core::PlayerId;
///
/// let pool = DeckPool::new(
///     vec![vec![CardData::new("Sentinel", 2, 1, 3)]],
///     vec![vec![], vec![CardData::new("Goliath", 6, 0, 3)]],
/// );
/// assert_eq!(pool.deck(PlayerId::TWO, 1).map(|d| d.len()), Some(1));
/// assert!(pool.deck(PlayerId::ONE, 1).is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckPool {
    pub player_one_decks: Vec<DeckList>,
    pub player_two_decks: Vec<DeckList>,
}

impl DeckPool {
    pub fn new(player_one_decks: Vec<DeckList>, player_two_decks: Vec<DeckList>) -> Self {
        Self {
            player_one_decks,
            player_two_decks,
        }
    }

    /// Look up a player's deck list by index.
    #[must_use]
    pub fn deck(&self, player: PlayerId, index: usize) -> Option<&DeckList> {
        match player {
            PlayerId::ONE => self.player_one_decks.get(index),
            _ => self.player_two_decks.get(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_data_builder() {
        let card = CardData::new("Warden", 3, 2, 5)
            .with_description("Holds the line")
            .with_colors(["Grey", "Blue"]);

        assert_eq!(card.name, "Warden");
        assert_eq!(card.mana_cost, 3);
        assert_eq!(card.attack_damage, 2);
        assert_eq!(card.health, 5);
        assert_eq!(card.colors, vec!["Grey".to_string(), "Blue".to_string()]);
    }

    #[test]
    fn test_card_data_deserializes_input_shape() {
        let json = r#"{
            "mana": 2,
            "attackDamage": 3,
            "health": 4,
            "description": "A berserker",
            "colors": ["Red"],
            "name": "Berserker"
        }"#;

        let card: CardData = serde_json::from_str(json).unwrap();

        assert_eq!(card, CardData::new("Berserker", 2, 3, 4)
            .with_description("A berserker")
            .with_colors(["Red"]));
    }

    #[test]
    fn test_hero_data_without_attack() {
        let json = r#"{"mana": 4, "health": 30, "name": "Lord Royce"}"#;
        let hero: CardData = serde_json::from_str(json).unwrap();

        assert_eq!(hero.attack_damage, 0);
        assert!(hero.colors.is_empty());
    }

    #[test]
    fn test_deck_pool_lookup() {
        let pool = DeckPool::new(vec![vec![], vec![]], vec![vec![]]);

        assert!(pool.deck(PlayerId::ONE, 1).is_some());
        assert!(pool.deck(PlayerId::TWO, 1).is_none());
    }
}

//! Typed commands supplied by the command source.
//!
//! Each command carries only the fields its kind needs. Fields are assumed
//! structurally valid (present, right type); domain rules are checked by the
//! `Validator` before the engine acts on them.
//!
//! Mutating commands act on behalf of the current player. Query commands
//! never change match state.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A board coordinate: row slot (`x`, 0..4) and position in the row (`y`, 0..5).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: usize,
    pub y: usize,
}

impl Coordinates {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A complete command.
///
/// ## Example
///
/// ```
/// use card_duel::core::{Command, Coordinates};
///
/// let attack = Command::CardUsesAttack {
///     card_attacker: Coordinates::new(2, 0),
///     card_attacked: Coordinates::new(1, 0),
/// };
/// assert!(attack.is_mutating());
/// assert_eq!(attack.name(), "cardUsesAttack");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum Command {
    // === Mutating ===
    /// End the current player's turn.
    EndPlayerTurn,

    /// Place the card at `hand_idx` from the current player's hand.
    #[serde(rename_all = "camelCase")]
    PlaceCard { hand_idx: usize },

    /// Attack a board minion with a board minion.
    #[serde(rename_all = "camelCase")]
    CardUsesAttack {
        card_attacker: Coordinates,
        card_attacked: Coordinates,
    },

    /// Use a board minion's ability on a board minion.
    #[serde(rename_all = "camelCase")]
    CardUsesAbility {
        card_attacker: Coordinates,
        card_attacked: Coordinates,
    },

    /// Attack the enemy hero with a board minion.
    #[serde(rename_all = "camelCase")]
    UseAttackHero { card_attacker: Coordinates },

    /// Use the current player's hero ability on a row.
    #[serde(rename_all = "camelCase")]
    UseHeroAbility { affected_row: usize },

    // === Queries ===
    // `player_idx` is a 0-based seat: 0 is player one, 1 is player two.
    // Any other index fails to decode.
    #[serde(rename_all = "camelCase")]
    GetPlayerDeck { player_idx: PlayerId },

    #[serde(rename_all = "camelCase")]
    GetPlayerHero { player_idx: PlayerId },

    GetPlayerTurn,

    #[serde(rename_all = "camelCase")]
    GetCardsInHand { player_idx: PlayerId },

    #[serde(rename_all = "camelCase")]
    GetPlayerMana { player_idx: PlayerId },

    GetCardsOnTable,

    GetCardAtPosition { x: usize, y: usize },

    GetFrozenCardsOnTable,

    GetTotalGamesPlayed,

    GetPlayerOneWins,

    GetPlayerTwoWins,
}

impl Command {
    /// Wire name of this command kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::EndPlayerTurn => "endPlayerTurn",
            Command::PlaceCard { .. } => "placeCard",
            Command::CardUsesAttack { .. } => "cardUsesAttack",
            Command::CardUsesAbility { .. } => "cardUsesAbility",
            Command::UseAttackHero { .. } => "useAttackHero",
            Command::UseHeroAbility { .. } => "useHeroAbility",
            Command::GetPlayerDeck { .. } => "getPlayerDeck",
            Command::GetPlayerHero { .. } => "getPlayerHero",
            Command::GetPlayerTurn => "getPlayerTurn",
            Command::GetCardsInHand { .. } => "getCardsInHand",
            Command::GetPlayerMana { .. } => "getPlayerMana",
            Command::GetCardsOnTable => "getCardsOnTable",
            Command::GetCardAtPosition { .. } => "getCardAtPosition",
            Command::GetFrozenCardsOnTable => "getFrozenCardsOnTable",
            Command::GetTotalGamesPlayed => "getTotalGamesPlayed",
            Command::GetPlayerOneWins => "getPlayerOneWins",
            Command::GetPlayerTwoWins => "getPlayerTwoWins",
        }
    }

    /// Does this command change match state when accepted?
    #[must_use]
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::EndPlayerTurn
                | Command::PlaceCard { .. }
                | Command::CardUsesAttack { .. }
                | Command::CardUsesAbility { .. }
                | Command::UseAttackHero { .. }
                | Command::UseHeroAbility { .. }
        )
    }
}

/// An accepted mutating command with the context it ran in.
///
/// Used for match history and replay/debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The player who was active.
    pub player: PlayerId,

    /// The command applied.
    pub command: Command,

    /// Round number when the command was applied.
    pub round: u32,

    /// Ended-turn count when the command was applied.
    pub turn: u32,
}

impl CommandRecord {
    #[must_use]
    pub fn new(player: PlayerId, command: Command, round: u32, turn: u32) -> Self {
        Self {
            player,
            command,
            round,
            turn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutating_split() {
        assert!(Command::EndPlayerTurn.is_mutating());
        assert!(Command::PlaceCard { hand_idx: 0 }.is_mutating());
        assert!(Command::UseHeroAbility { affected_row: 1 }.is_mutating());
        assert!(!Command::GetPlayerTurn.is_mutating());
        assert!(!Command::GetCardAtPosition { x: 0, y: 0 }.is_mutating());
        assert!(!Command::GetPlayerMana {
            player_idx: PlayerId::ONE
        }
        .is_mutating());
    }

    #[test]
    fn test_command_wire_format() {
        let json = r#"{"command":"cardUsesAbility","cardAttacker":{"x":3,"y":0},"cardAttacked":{"x":1,"y":2}}"#;
        let command: Command = serde_json::from_str(json).unwrap();

        assert_eq!(
            command,
            Command::CardUsesAbility {
                card_attacker: Coordinates::new(3, 0),
                card_attacked: Coordinates::new(1, 2),
            }
        );
        assert_eq!(command.name(), "cardUsesAbility");
    }

    #[test]
    fn test_query_seat_is_zero_based() {
        let command: Command =
            serde_json::from_str(r#"{"command":"getPlayerMana","playerIdx":1}"#).unwrap();
        assert_eq!(
            command,
            Command::GetPlayerMana {
                player_idx: PlayerId::TWO
            }
        );

        let result = serde_json::from_str::<Command>(r#"{"command":"getPlayerMana","playerIdx":2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unit_command_wire_format() {
        let command: Command = serde_json::from_str(r#"{"command":"endPlayerTurn"}"#).unwrap();
        assert_eq!(command, Command::EndPlayerTurn);

        let json = serde_json::to_string(&Command::PlaceCard { hand_idx: 2 }).unwrap();
        assert_eq!(json, r#"{"command":"placeCard","handIdx":2}"#);
    }

    #[test]
    fn test_command_record_serialization() {
        let record = CommandRecord::new(PlayerId::TWO, Command::EndPlayerTurn, 3, 5);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: CommandRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}

//! What the engine reports back for each command.
//!
//! Every dispatched command yields exactly one `Outcome::Success` or
//! `Outcome::Rejected`. A hero kill yields one extra `Outcome::GameEnded`.
//! Queries attach a `Projection`; views are owned snapshots, so a sink may
//! keep them after the match moves on.

use serde::Serialize;

use super::player::Player;
use crate::board::Board;
use crate::cards::{CardRef, Hero, Minion};
use crate::core::{Command, PlayerId};
use crate::rules::{GameResult, Rejection};

/// Snapshot of a minion, as shown to a sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub mana: u32,
    pub attack_damage: u32,
    pub health: i32,
    pub description: String,
    pub colors: Vec<String>,
    pub name: String,
}

impl From<CardRef<'_>> for CardView {
    fn from(card: CardRef<'_>) -> Self {
        let data = card.data();
        Self {
            mana: data.mana_cost,
            attack_damage: data.attack_damage,
            health: data.health,
            description: data.description.clone(),
            colors: data.colors.clone(),
            name: data.name.clone(),
        }
    }
}

impl From<&Minion> for CardView {
    fn from(minion: &Minion) -> Self {
        CardRef::Minion(minion).into()
    }
}

/// Snapshot of a hero. Heroes have no attack to show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    pub mana: u32,
    pub description: String,
    pub colors: Vec<String>,
    pub name: String,
    pub health: i32,
}

impl From<&Hero> for HeroView {
    fn from(hero: &Hero) -> Self {
        let data = CardRef::Hero(hero).data();
        Self {
            mana: data.mana_cost,
            description: data.description.clone(),
            colors: data.colors.clone(),
            name: data.name.clone(),
            health: data.health,
        }
    }
}

/// State answered by a query command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Projection {
    /// Deck, hand or frozen cards, in order.
    Cards(Vec<CardView>),
    /// All four rows in slot order.
    Table(Vec<Vec<CardView>>),
    Card(CardView),
    Hero(HeroView),
    Player(PlayerId),
    /// Mana or a session counter.
    Number(u32),
}

impl Projection {
    pub(crate) fn cards<'a>(minions: impl IntoIterator<Item = &'a Minion>) -> Self {
        Projection::Cards(minions.into_iter().map(CardView::from).collect())
    }

    pub(crate) fn deck(player: &Player) -> Self {
        Self::cards(player.deck())
    }

    pub(crate) fn hand(player: &Player) -> Self {
        Self::cards(player.hand())
    }

    pub(crate) fn table(board: &Board) -> Self {
        Projection::Table(
            board
                .rows()
                .map(|(_, row)| row.iter().map(CardView::from).collect())
                .collect(),
        )
    }
}

/// One record delivered to the result sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Outcome {
    Success {
        command: Command,
        #[serde(skip_serializing_if = "Option::is_none")]
        output: Option<Projection>,
    },
    Rejected {
        command: Command,
        reason: String,
        error: Rejection,
    },
    GameEnded {
        winner: PlayerId,
        message: String,
    },
}

impl Outcome {
    #[must_use]
    pub fn success(command: Command, output: Option<Projection>) -> Self {
        Outcome::Success { command, output }
    }

    #[must_use]
    pub fn rejected(command: Command, error: Rejection) -> Self {
        Outcome::Rejected {
            command,
            reason: error.reason(),
            error,
        }
    }

    #[must_use]
    pub fn game_ended(result: GameResult) -> Self {
        Outcome::GameEnded {
            winner: result.winner(),
            message: result.message(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// The rejection, if this outcome is one.
    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Rejected { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The query projection, if any.
    #[must_use]
    pub fn output(&self) -> Option<&Projection> {
        match self {
            Outcome::Success { output, .. } => output.as_ref(),
            _ => None,
        }
    }
}

/// Receives one outcome per command, in command order.
pub trait ResultSink {
    fn emit(&mut self, outcome: Outcome);
}

impl ResultSink for Vec<Outcome> {
    fn emit(&mut self, outcome: Outcome) {
        self.push(outcome);
    }
}

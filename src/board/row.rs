//! A single board row and its fixed slot identity.
//!
//! Rows are dense: minions occupy a prefix of the positions, index 0 is
//! always the first surviving minion, and removal shifts later minions left.
//! A row never holds more than `ROW_LENGTH` minions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Minion, RowEffect};
use crate::core::{PlayerId, ROW_COUNT, ROW_LENGTH};

/// Front or back row of a player's half.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowKind {
    /// Facing the enemy; tank and druid minions are placed here.
    Front,
    /// Every other minion.
    Back,
}

impl RowKind {
    /// Row a minion is placed on: front for tanks and druids, back otherwise.
    #[must_use]
    pub fn for_minion(minion: &Minion) -> Self {
        if minion.is_front_row() {
            RowKind::Front
        } else {
            RowKind::Back
        }
    }
}

/// One of the four fixed row slots.
///
/// | Slot | Owner      | Kind  |
/// |------|------------|-------|
/// | 0    | Player two | Back  |
/// | 1    | Player two | Front |
/// | 2    | Player one | Front |
/// | 3    | Player one | Back  |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowSlot(u8);

impl RowSlot {
    /// Slot for a raw row index, `None` outside `0..ROW_COUNT`.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < ROW_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// The slot holding `player`'s row of `kind`.
    #[must_use]
    pub const fn of(player: PlayerId, kind: RowKind) -> Self {
        match (player.0, kind) {
            (0, RowKind::Front) => Self(2),
            (0, RowKind::Back) => Self(3),
            (_, RowKind::Back) => Self(0),
            (_, RowKind::Front) => Self(1),
        }
    }

    /// All slots in board order.
    pub fn all() -> impl Iterator<Item = RowSlot> {
        (0..ROW_COUNT as u8).map(RowSlot)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Player who owns this slot.
    #[must_use]
    pub const fn owner(self) -> PlayerId {
        match self.0 {
            0 | 1 => PlayerId::TWO,
            _ => PlayerId::ONE,
        }
    }

    #[must_use]
    pub const fn kind(self) -> RowKind {
        match self.0 {
            1 | 2 => RowKind::Front,
            _ => RowKind::Back,
        }
    }
}

impl std::fmt::Display for RowSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row({})", self.0)
    }
}

/// Dense, left-packed sequence of at most `ROW_LENGTH` minions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    minions: SmallVec<[Minion; ROW_LENGTH]>,
}

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.minions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.minions.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.minions.len() >= ROW_LENGTH
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Minion> {
        self.minions.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Minion> {
        self.minions.get_mut(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Minion> {
        self.minions.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Minion> {
        self.minions.iter_mut()
    }

    /// Append into the first empty position.
    ///
    /// Returns the position, or hands the minion back if the row is full.
    pub fn push(&mut self, minion: Minion) -> Result<usize, Minion> {
        if self.is_full() {
            return Err(minion);
        }
        self.minions.push(minion);
        Ok(self.minions.len() - 1)
    }

    /// Remove the minion at `position`, shifting later minions left.
    pub fn remove(&mut self, position: usize) -> Option<Minion> {
        if position < self.minions.len() {
            Some(self.minions.remove(position))
        } else {
            None
        }
    }

    #[must_use]
    pub fn has_tank(&self) -> bool {
        self.minions.iter().any(Minion::is_tank)
    }

    /// Position of the highest-health minion; the lowest position wins ties.
    #[must_use]
    pub fn highest_health_position(&self) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (position, minion) in self.minions.iter().enumerate() {
            match best {
                Some((_, health)) if minion.health() <= health => {}
                _ => best = Some((position, minion.health())),
            }
        }
        best.map(|(position, _)| position)
    }

    /// Apply a row-wide effect. Returns the minion it destroyed, if any.
    pub fn apply(&mut self, effect: RowEffect) -> Option<Minion> {
        match effect {
            RowEffect::FreezeAll => {
                for minion in &mut self.minions {
                    minion.frozen = true;
                }
                None
            }
            RowEffect::DestroyHighestHealth => {
                let position = self.highest_health_position()?;
                self.remove(position)
            }
            RowEffect::BoostHealth => {
                for minion in &mut self.minions {
                    minion.data.health += 1;
                }
                None
            }
            RowEffect::BoostAttack => {
                for minion in &mut self.minions {
                    minion.data.attack_damage += 1;
                }
                None
            }
        }
    }
}

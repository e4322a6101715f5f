//! The four-row board.
//!
//! The `Board` owns the minions in play and offers placement, removal,
//! lookup by raw coordinates, and the round/turn bookkeeping that touches
//! every minion (attack-flag reset, unfreeze).
//!
//! Raw coordinates come straight from commands: `x` is the row slot, `y`
//! the position within the row. Lookups with out-of-range coordinates
//! return `None` rather than panicking.

use super::row::{Row, RowKind, RowSlot};
use crate::cards::{Minion, RowEffect};
use crate::core::{Coordinates, PlayerId, ROW_COUNT};

/// Four row slots with permanent ownership.
///
/// ## Usage
///
/// ```
/// use card_duel::board::{Board, RowKind};
/// use card_duel::cards::{CardData, Minion};
/// use card_duel::core::{Coordinates, PlayerId};
///
/// let mut board = Board::new();
/// let goliath = Minion::new(CardData::new("Goliath", 6, 1, 5));
///
/// board.place(PlayerId::ONE, RowKind::Front, goliath).unwrap();
///
/// assert!(board.has_tank(PlayerId::ONE));
/// assert_eq!(board.card_at(Coordinates::new(2, 0)).unwrap().name(), "Goliath");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    rows: [Row; ROW_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Rows ===

    #[must_use]
    pub fn row(&self, slot: RowSlot) -> &Row {
        &self.rows[slot.index()]
    }

    pub fn row_mut(&mut self, slot: RowSlot) -> &mut Row {
        &mut self.rows[slot.index()]
    }

    /// `player`'s row of the given kind.
    #[must_use]
    pub fn row_for(&self, player: PlayerId, kind: RowKind) -> &Row {
        self.row(RowSlot::of(player, kind))
    }

    /// Resolve a raw row index the given player is allowed to address.
    ///
    /// Returns `None` if the index is out of range or the row belongs to
    /// the other player.
    #[must_use]
    pub fn addressable(&self, player: PlayerId, row: usize) -> Option<RowSlot> {
        RowSlot::new(row).filter(|slot| slot.owner() == player)
    }

    /// Owner of a raw row index, `None` if out of range.
    #[must_use]
    pub fn owner_of_slot(&self, row: usize) -> Option<PlayerId> {
        RowSlot::new(row).map(RowSlot::owner)
    }

    /// All rows in slot order.
    pub fn rows(&self) -> impl Iterator<Item = (RowSlot, &Row)> {
        RowSlot::all().map(move |slot| (slot, self.row(slot)))
    }

    #[must_use]
    pub fn is_full(&self, slot: RowSlot) -> bool {
        self.row(slot).is_full()
    }

    // === Cards ===

    /// Minion at raw coordinates, if any.
    #[must_use]
    pub fn card_at(&self, at: Coordinates) -> Option<&Minion> {
        RowSlot::new(at.x).and_then(|slot| self.row(slot).get(at.y))
    }

    pub fn card_at_mut(&mut self, at: Coordinates) -> Option<&mut Minion> {
        let slot = RowSlot::new(at.x)?;
        self.row_mut(slot).get_mut(at.y)
    }

    /// Append a minion to `player`'s row of `kind`.
    ///
    /// Returns the position it landed on, or the minion back if the row is
    /// full; callers validate capacity first.
    pub fn place(&mut self, player: PlayerId, kind: RowKind, minion: Minion) -> Result<usize, Minion> {
        self.row_mut(RowSlot::of(player, kind)).push(minion)
    }

    /// Remove the minion at raw coordinates, shifting the row left.
    pub fn remove_at(&mut self, at: Coordinates) -> Option<Minion> {
        let slot = RowSlot::new(at.x)?;
        self.row_mut(slot).remove(at.y)
    }

    /// Frozen minions in slot order, then position order.
    pub fn frozen_cards(&self) -> impl Iterator<Item = &Minion> {
        self.rows
            .iter()
            .flat_map(Row::iter)
            .filter(|minion| minion.frozen)
    }

    // === Rules support ===

    /// Does `player`'s front row hold a tank?
    #[must_use]
    pub fn has_tank(&self, player: PlayerId) -> bool {
        self.row_for(player, RowKind::Front).has_tank()
    }

    /// Clear the attacked flag on every minion in play.
    pub fn reset_attack_flags(&mut self) {
        for minion in self.rows.iter_mut().flat_map(Row::iter_mut) {
            minion.has_attacked = false;
        }
    }

    /// Unfreeze every minion on `player`'s two rows.
    pub fn unfreeze(&mut self, player: PlayerId) {
        for kind in [RowKind::Front, RowKind::Back] {
            for minion in self.row_mut(RowSlot::of(player, kind)).iter_mut() {
                minion.frozen = false;
            }
        }
    }

    /// Apply a row-wide effect. Returns the minion it destroyed, if any.
    pub fn apply_to_row(&mut self, slot: RowSlot, effect: RowEffect) -> Option<Minion> {
        self.row_mut(slot).apply(effect)
    }
}

//! Board: four fixed row slots holding the minions in play.
//!
//! ## Key Types
//!
//! - `RowSlot`: One of the four rows, permanently bound to (owner, kind)
//! - `RowKind`: Front or back
//! - `Row`: Dense sequence of at most five minions
//! - `Board`: All four rows plus board-wide bookkeeping

pub mod grid;
pub mod row;

pub use grid::Board;
pub use row::{Row, RowKind, RowSlot};

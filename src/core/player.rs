//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier for the two sides of a match.
//! `PlayerId::ONE` (index 0) owns the lower half of the board,
//! `PlayerId::TWO` (index 1) the upper half.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use thiserror::Error;

/// Number of seats in a match.
pub const PLAYER_COUNT: usize = 2;

/// A raw seat index outside `0..PLAYER_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no seat at index {0}; seats are 0 (player one) and 1 (player two)")]
pub struct InvalidSeat(pub u8);

/// Seat identifier. Indices are 0-based: the first player is `PlayerId(0)`.
///
/// Serialized as the bare index. Deserialization goes through
/// `PlayerId::new`, so an out-of-range index is a decode error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Player one (seat A).
    pub const ONE: PlayerId = PlayerId(0);
    /// Player two (seat B).
    pub const TWO: PlayerId = PlayerId(1);

    /// Create a player ID from a raw index.
    ///
    /// Returns `None` for anything outside `0..PLAYER_COUNT`.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if (id as usize) < PLAYER_COUNT {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both seats in index order.
    ///
    /// ```
    /// use card_duel::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::ONE, PlayerId::TWO]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidSeat;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        PlayerId::new(index).ok_or(InvalidSeat(index))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "Player one"),
            _ => write!(f, "Player two"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use card_duel::core::{PlayerId, PlayerMap};
///
/// let mut mana: PlayerMap<u32> = PlayerMap::new(|_| 0);
/// mana[PlayerId::TWO] = 3;
/// assert_eq!(mana[PlayerId::ONE], 0);
/// assert_eq!(mana[PlayerId::TWO], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a new PlayerMap from explicit per-seat values.
    pub fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

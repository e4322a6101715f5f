//! Deterministic random number generation for deck shuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Fisher–Yates**: `shuffle` permutes in place with one pass
//!
//! ```
//! use card_duel::core::GameRng;
//!
//! let mut a = vec![1, 2, 3, 4, 5, 6];
//! let mut b = a.clone();
//! GameRng::new(7).shuffle(&mut a);
//! GameRng::new(7).shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG keyed by a match seed.
///
/// Uses ChaCha8 for speed while keeping the sequence stable across platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffle a slice in place (Fisher–Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_is_deterministic() {
        let mut first: Vec<u32> = (0..20).collect();
        let mut second = first.clone();

        GameRng::new(42).shuffle(&mut first);
        GameRng::new(42).shuffle(&mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_different_seeds() {
        let mut first: Vec<u32> = (0..20).collect();
        let mut second = first.clone();

        GameRng::new(1).shuffle(&mut first);
        GameRng::new(2).shuffle(&mut second);

        assert_ne!(first, second);
    }
}

//! Deterministic random number generation for round content.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Unbiased shuffle**: In-place Fisher-Yates via `rand`, never a
//!   comparator trick
//! - **Guarded sampling**: Sampling without replacement fails loudly when
//!   the pool is too small instead of truncating
//!
//! ## Usage
//!
//! ```
//! use playkit::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut deck);
//!
//! // Same seed, same permutation.
//! let mut rng2 = GameRng::new(42);
//! let mut deck2 = vec![1, 2, 3, 4, 5];
//! rng2.shuffle(&mut deck2);
//! assert_eq!(deck, deck2);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::error::EngineError;

/// Deterministic RNG used by every round generator.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. The seed is injectable so the test suite can reproduce
/// generated rounds exactly.
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

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (uniform over all permutations).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Sample `amount` distinct elements from `pool`, in random order.
    ///
    /// Fails with [`EngineError::InsufficientPool`] when the pool is too
    /// small. Levels that request more difficulty-filtered content than
    /// exists must hit this guard, not receive a short round.
    pub fn sample<T: Clone>(&mut self, pool: &[T], amount: usize) -> Result<Vec<T>, EngineError> {
        if amount > pool.len() {
            return Err(EngineError::InsufficientPool {
                needed: amount,
                available: pool.len(),
            });
        }
        let indices = rand::seq::index::sample(&mut self.inner, pool.len(), amount);
        Ok(indices.iter().map(|i| pool[i].clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range(0..1000), rng2.gen_range(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_eq!(data.len(), original.len());
        assert_ne!(data, original); // astronomically unlikely for this seed

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_sample_distinct() {
        let mut rng = GameRng::new(42);
        let pool: Vec<i32> = (0..15).collect();

        let picked = rng.sample(&pool, 6).unwrap();
        assert_eq!(picked.len(), 6);

        let mut sorted = picked.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 6, "sampled elements must be distinct");
    }

    #[test]
    fn test_sample_pool_exhaustion() {
        let mut rng = GameRng::new(42);
        let pool = vec![1, 2, 3];

        let err = rng.sample(&pool, 10).unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientPool {
                needed: 10,
                available: 3
            }
        );
    }

    #[test]
    fn test_sample_whole_pool() {
        let mut rng = GameRng::new(7);
        let pool = vec!["a", "b", "c"];

        let mut picked = rng.sample(&pool, 3).unwrap();
        picked.sort();
        assert_eq!(picked, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sample_deterministic() {
        let pool: Vec<i32> = (0..20).collect();

        let picked1 = GameRng::new(99).sample(&pool, 5).unwrap();
        let picked2 = GameRng::new(99).sample(&pool, 5).unwrap();

        assert_eq!(picked1, picked2);
    }
}

//! Target word selection
//!
//! An explicit, constructible source of hidden words. Selection is uniform
//! over the pool with replacement; the same word may recur across rounds.
//! Seeding makes the pick sequence reproducible, which is what makes game
//! instances shareable. There is deliberately no module-level rng state:
//! two sessions never share a hidden generator.

use crate::core::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable source of round targets
#[derive(Debug)]
pub struct TargetSource {
    pool: Vec<Word>,
    rng: StdRng,
    seed: Option<u64>,
}

impl TargetSource {
    /// Create an entropy-seeded source; picks are not reproducible
    ///
    /// # Panics
    /// Panics if the pool is empty. An empty pool can never occur under
    /// correct configuration, so this is a programming error rather than a
    /// recoverable condition.
    #[must_use]
    pub fn new(pool: Vec<Word>) -> Self {
        assert!(!pool.is_empty(), "target pool must not be empty");
        Self {
            pool,
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Create a seeded source; identical seed and pool give an identical
    /// pick sequence
    ///
    /// # Panics
    /// Panics if the pool is empty.
    #[must_use]
    pub fn seeded(pool: Vec<Word>, seed: u64) -> Self {
        assert!(!pool.is_empty(), "target pool must not be empty");
        Self {
            pool,
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Restart the reproducible sequence from a seed
    pub fn reset_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = Some(seed);
    }

    /// The active seed, if one was set
    #[inline]
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draw the next target, uniformly with replacement
    pub fn pick(&mut self) -> Word {
        let index = self.rng.random_range(0..self.pool.len());
        self.pool[index].clone()
    }
}

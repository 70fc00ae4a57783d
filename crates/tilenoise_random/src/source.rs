//! # Random Source Capability
//!
//! The one operation a permutation shuffle needs from a generator: a uniform
//! integer below a bound.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed of the default source.
pub const DEFAULT_SEED: u64 = 0xDEAD_BEEF_CAFE_BABE;

/// Generator used when the caller does not supply one.
pub type DefaultSource = ChaCha8Rng;

/// A generator of bounded uniform integers.
///
/// Implementations must be deterministic for a given starting state so that
/// two tables shuffled from identically seeded sources are identical.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `[0, bound)`.
    ///
    /// `bound` is always at least 1 when called from a shuffle.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }
}

impl RandomSource for ChaCha8Rng {
    #[inline]
    fn next_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "bound must be positive");
        self.gen_range(0..bound)
    }
}

impl RandomSource for StdRng {
    #[inline]
    fn next_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "bound must be positive");
        self.gen_range(0..bound)
    }
}

/// Builds a fresh default source.
///
/// Every call returns a generator in the same starting state; there is no
/// process-wide instance that advances between calls.
#[must_use]
pub fn default_source() -> DefaultSource {
    ChaCha8Rng::seed_from_u64(DEFAULT_SEED)
}

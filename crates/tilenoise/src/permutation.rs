//! # Permutation Table
//!
//! Shuffled lookup table that hashes lattice coordinates into gradient
//! selectors. Built once per field, immutable afterwards.

use serde::{Deserialize, Serialize};
use tilenoise_random::RandomSource;

/// What each table entry stores.
///
/// Only the low three bits of an entry ever pick a gradient, so the
/// `Gradient3Bit` table is a cheaper surjection rather than a permutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectorWidth {
    /// `entries[i] = i` before shuffling; the table is a bijection.
    #[default]
    #[serde(rename = "full_index")]
    FullIndex,
    /// `entries[i] = i mod 8` before shuffling.
    #[serde(rename = "gradient_3bit")]
    Gradient3Bit,
}

/// Shuffled lattice hash table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationTable {
    entries: Vec<u32>,
    selector: SelectorWidth,
}

impl PermutationTable {
    /// Builds the unshuffled table of `size` entries.
    ///
    /// `size` must fit in a `u32` index; the noise field checks this before
    /// calling.
    #[must_use]
    pub fn identity(size: usize, selector: SelectorWidth) -> Self {
        let entries = (0..size)
            .map(|i| match selector {
                SelectorWidth::FullIndex => i as u32,
                SelectorWidth::Gradient3Bit => (i & 0x7) as u32,
            })
            .collect();

        Self { entries, selector }
    }

    /// Builds and shuffles a table in one step.
    #[must_use]
    pub fn new<R: RandomSource + ?Sized>(size: usize, selector: SelectorWidth, rng: &mut R) -> Self {
        let mut table = Self::identity(size, selector);
        table.shuffle(rng);

        tracing::debug!(size, ?selector, "permutation table built");
        table
    }

    /// Fisher-Yates shuffle from the last index down to 1.
    ///
    /// Draws exactly `len - 1` values, the draw for index `i` bounded by
    /// `i + 1`, so identical sources give identical tables.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.entries.len()).rev() {
            let j = rng.next_below(i + 1);
            self.entries.swap(i, j);
        }
    }

    /// Entry at `index`, wrapped to the table length.
    ///
    /// # Panics
    ///
    /// Panics if the table is empty.
    #[inline]
    #[must_use]
    pub fn lookup(&self, index: usize) -> usize {
        self.entries[index % self.entries.len()] as usize
    }

    /// Number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Storage mode of the entries.
    #[inline]
    #[must_use]
    pub const fn selector(&self) -> SelectorWidth {
        self.selector
    }

    /// Raw entries.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.entries
    }
}

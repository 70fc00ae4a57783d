//! # Xoroshiro128+
//!
//! Blackman/Vigna xoroshiro128+ with the 2^64 jump and 2^96 long jump.
//!
//! Jumping lets one seed feed several noise fields with non-overlapping
//! streams: construct once, then hand `jumped()` copies to each consumer.

use rand::{Error, RngCore, SeedableRng};

use crate::source::RandomSource;

/// Polynomial for a 2^64-step jump.
const JUMP: [u64; 2] = [0x2bd7_a6a6_e99c_2ddc, 0x0992_ccaf_6a6f_ca05];

/// Polynomial for a 2^96-step jump.
const LONG_JUMP: [u64; 2] = [0x360f_d5f2_cf8d_5d99, 0x9c6e_6877_736c_46e3];

/// 128-bit xoroshiro+ generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Xoroshiro128Plus {
    lo: u64,
    hi: u64,
}

impl Xoroshiro128Plus {
    /// Creates a generator from a 64-bit seed.
    ///
    /// Every seed, including zero, yields a non-zero state.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            hi: (seed ^ 0xfac1_e047_41da_b55a).rotate_left((seed & 0x1f) as u32),
            lo: seed.rotate_left(12) ^ 0xf01e_4638_2d57_cab9,
        }
    }

    #[inline]
    fn step(&mut self) -> u64 {
        let s0 = self.lo;
        let mut s1 = self.hi;
        let result = s0.wrapping_add(s1).rotate_left(17).wrapping_add(s0);

        s1 ^= s0;
        self.lo = s0.rotate_left(49) ^ s1 ^ (s1 << 21);
        self.hi = s1.rotate_left(28);

        result
    }

    /// Returns a float in `[0, 1]`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.step() & !1) as f64 / u64::MAX as f64
    }

    /// Returns a uniformly distributed boolean.
    #[inline]
    pub fn next_bool(&mut self) -> bool {
        self.step() >> 63 == 1
    }

    /// Advances the state by 2^64 draws.
    pub fn jump(&mut self) {
        self.apply_polynomial(JUMP);
    }

    /// Advances the state by 2^96 draws.
    pub fn long_jump(&mut self) {
        self.apply_polynomial(LONG_JUMP);
    }

    /// Returns a copy advanced by 2^64 draws, leaving `self` untouched.
    #[must_use]
    pub fn jumped(&self) -> Self {
        let mut next = *self;
        next.jump();
        next
    }

    /// Returns a copy advanced by 2^96 draws, leaving `self` untouched.
    #[must_use]
    pub fn long_jumped(&self) -> Self {
        let mut next = *self;
        next.long_jump();
        next
    }

    fn apply_polynomial(&mut self, polynomial: [u64; 2]) {
        let mut s0 = 0u64;
        let mut s1 = 0u64;

        for word in polynomial {
            for bit in 0..64 {
                if word & (1u64 << bit) != 0 {
                    s0 ^= self.lo;
                    s1 ^= self.hi;
                }
                self.step();
            }
        }

        self.lo = s0;
        self.hi = s1;
    }
}

impl Default for Xoroshiro128Plus {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Draws are reduced with `% bound`, like the host PRNG this generator
/// mirrors, so they carry a modulo bias of at most `bound / 2^64`. Use a
/// `rand` generator when exact uniformity matters.
impl RandomSource for Xoroshiro128Plus {
    #[inline]
    fn next_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "bound must be positive");
        (self.step() % bound as u64) as usize
    }
}

impl RngCore for Xoroshiro128Plus {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xoroshiro128Plus {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        lo.copy_from_slice(&seed[..8]);
        hi.copy_from_slice(&seed[8..]);

        let state = Self {
            lo: u64::from_le_bytes(lo),
            hi: u64::from_le_bytes(hi),
        };
        // An all-zero state never leaves zero.
        if state.lo == 0 && state.hi == 0 {
            Self::new(0)
        } else {
            state
        }
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

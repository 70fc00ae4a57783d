//! # Tilenoise
//!
//! Tileable 2D gradient noise with fractal octaves and per-cell memoization.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same random source state + same parameters = same field
//! 2. **Tileable**: Lattice coordinates wrap at the field edges
//! 3. **Memoized**: Each cell runs the octave loop once, on first query
//! 4. **Explicit**: No global random state; sources are passed in
//!
//! ## Core Components
//!
//! - `PermutationTable`: Shuffled lattice hash
//! - `NoiseField`: Octave summation with a lazily filled cache
//! - `SharedNoiseField`: Reference-counted handle for several owners
//! - `NoiseConfig`: Octave parameters, loadable from TOML
//!
//! ## Example
//!
//! ```rust,ignore
//! use tilenoise::{NoiseConfig, NoiseField};
//! use tilenoise_random::Xoroshiro128Plus;
//!
//! let config = NoiseConfig::default().with_octaves(4);
//! let mut rng = Xoroshiro128Plus::new(12345);
//! let mut field = NoiseField::new(256, 256, config, &mut rng)?;
//!
//! let height = field.sample(100, 200).unwrap_or(0.0);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod field;
pub mod kernel;
pub mod permutation;
pub mod shared;

pub use config::NoiseConfig;
pub use error::{NoiseError, NoiseResult};
pub use field::NoiseField;
pub use permutation::{PermutationTable, SelectorWidth};
pub use shared::SharedNoiseField;
pub use tilenoise_random::{default_source, RandomSource, Xoroshiro128Plus};

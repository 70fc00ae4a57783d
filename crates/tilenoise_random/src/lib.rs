//! # Tilenoise Random Sources
//!
//! The noise field never owns a generator of its own. It borrows one during
//! construction, draws exactly `len - 1` bounded integers to shuffle its
//! permutation table, and never touches it again.
//!
//! ## Core Components
//!
//! - `RandomSource`: uniform draw in `[0, bound)`
//! - `Xoroshiro128Plus`: 128-bit generator with jump-ahead for parallel streams
//! - `default_source`: the explicit fallback used when a caller has no generator
//!
//! ## Example
//!
//! ```rust,ignore
//! use tilenoise_random::{RandomSource, Xoroshiro128Plus};
//!
//! let mut rng = Xoroshiro128Plus::new(42);
//! let roll = rng.next_below(6);
//! assert!(roll < 6);
//!
//! // Independent stream 2^64 draws ahead
//! let other = rng.jumped();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod source;
pub mod xoroshiro;

pub use source::{default_source, DefaultSource, RandomSource, DEFAULT_SEED};
pub use xoroshiro::Xoroshiro128Plus;

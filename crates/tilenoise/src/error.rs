//! # Noise Error Types
//!
//! All errors that can occur while building or strictly sampling a field.

use thiserror::Error;

/// Errors that can occur in the noise system.
#[derive(Error, Debug)]
pub enum NoiseError {
    /// Width or height is zero, or the field is too large to address.
    #[error("invalid field dimensions: {width}x{height}")]
    InvalidDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Strict sample outside the field.
    #[error("coordinate ({x}, {y}) outside field [0, {width}) x [0, {height})")]
    OutOfRange {
        /// Requested column.
        x: i64,
        /// Requested row.
        y: i64,
        /// Field width.
        width: usize,
        /// Field height.
        height: usize,
    },

    /// Octave parameters are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for noise operations.
pub type NoiseResult<T> = Result<T, NoiseError>;

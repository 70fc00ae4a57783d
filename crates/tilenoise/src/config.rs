//! # Field Configuration
//!
//! Octave parameters and table storage mode. Can be built in code or loaded
//! from a TOML file:
//!
//! ```toml
//! octaves = 4
//! persistence = 0.5
//! lacunarity = 2.0
//! frequency = 0.1
//! selector = "gradient_3bit"
//! ```
//!
//! Missing keys fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, NoiseResult};
use crate::permutation::SelectorWidth;

/// Default number of octaves.
pub const DEFAULT_OCTAVES: u32 = 1;
/// Largest accepted octave count.
pub const MAX_OCTAVES: u32 = 64;
/// Default amplitude decay per octave.
pub const DEFAULT_PERSISTENCE: f64 = 0.5;
/// Default frequency growth per octave.
pub const DEFAULT_LACUNARITY: f64 = 2.0;
/// Default starting frequency.
pub const DEFAULT_FREQUENCY: f64 = 0.1;

/// Fractal parameters of a noise field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseConfig {
    /// Number of octaves summed, `1..=MAX_OCTAVES`.
    pub octaves: u32,
    /// Amplitude multiplier applied after each octave.
    pub persistence: f64,
    /// Frequency multiplier applied after each octave.
    pub lacunarity: f64,
    /// Frequency of the first octave.
    pub frequency: f64,
    /// Permutation table storage mode.
    pub selector: SelectorWidth,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            octaves: DEFAULT_OCTAVES,
            persistence: DEFAULT_PERSISTENCE,
            lacunarity: DEFAULT_LACUNARITY,
            frequency: DEFAULT_FREQUENCY,
            selector: SelectorWidth::default(),
        }
    }
}

impl NoiseConfig {
    /// Sets the octave count.
    #[must_use]
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Sets the persistence.
    #[must_use]
    pub fn with_persistence(mut self, persistence: f64) -> Self {
        self.persistence = persistence;
        self
    }

    /// Sets the lacunarity.
    #[must_use]
    pub fn with_lacunarity(mut self, lacunarity: f64) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    /// Sets the base frequency.
    #[must_use]
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the permutation table storage mode.
    #[must_use]
    pub fn with_selector(mut self, selector: SelectorWidth) -> Self {
        self.selector = selector;
        self
    }

    /// Checks that every parameter yields finite samples.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `octaves` is outside `1..=MAX_OCTAVES`,
    /// `persistence` is not finite, or `lacunarity`/`frequency` are not
    /// finite and positive.
    pub fn validate(&self) -> NoiseResult<()> {
        if self.octaves == 0 || self.octaves > MAX_OCTAVES {
            return Err(NoiseError::InvalidConfig(format!(
                "octaves must be in 1..={MAX_OCTAVES}, got {}",
                self.octaves
            )));
        }
        if !self.persistence.is_finite() {
            return Err(NoiseError::InvalidConfig(format!(
                "persistence must be finite, got {}",
                self.persistence
            )));
        }
        if !(self.lacunarity.is_finite() && self.lacunarity > 0.0) {
            return Err(NoiseError::InvalidConfig(format!(
                "lacunarity must be finite and positive, got {}",
                self.lacunarity
            )));
        }
        if !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(NoiseError::InvalidConfig(format!(
                "frequency must be finite and positive, got {}",
                self.frequency
            )));
        }
        Ok(())
    }

    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` on malformed TOML or invalid parameters.
    pub fn from_toml_str(text: &str) -> NoiseResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| NoiseError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, otherwise as
    /// [`NoiseConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> NoiseResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

//! # Noise Field
//!
//! A fixed `width x height` lattice of fractal gradient noise. Each cell is
//! computed on its first query and cached for the life of the field, so a
//! caller re-reading the same tile pays the octave loop once per cell.
//!
//! ## Tiling
//!
//! Lattice coordinates wrap at `width * freq` and `height * freq`, so the
//! field tiles seamlessly with itself along both axes.
//!
//! ## Determinism Guarantee
//!
//! Two fields built from random sources in the same state, with the same
//! dimensions and `NoiseConfig`, return bit-identical samples. Nothing is
//! promised across different sources or selector widths.

use tilenoise_random::{default_source, RandomSource};

use crate::config::NoiseConfig;
use crate::error::{NoiseError, NoiseResult};
use crate::kernel::{fade, gradient, lerp};
use crate::permutation::PermutationTable;

/// Memoized 2D gradient noise over a fixed lattice.
///
/// # Example
///
/// ```rust,ignore
/// let mut field = NoiseField::with_default_source(64, 64, NoiseConfig::default())?;
///
/// let value = field.sample(10, 20).expect("inside the field");
/// assert!((0.0..=1.0).contains(&value));
///
/// // Outside the lattice is a marker, not an error
/// assert_eq!(field.sample(-1, 0), None);
/// ```
#[derive(Clone, Debug)]
pub struct NoiseField {
    width: usize,
    height: usize,
    config: NoiseConfig,
    table: PermutationTable,
    /// Row-major, `None` until the cell is first sampled.
    cache: Vec<Option<f64>>,
    cached: usize,
}

impl NoiseField {
    /// Builds a field, shuffling its permutation table from `rng`.
    ///
    /// Draws exactly `2 * max(width, height) - 1` values from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is zero or the field is
    /// too large to index, and `InvalidConfig` if `config` fails validation.
    pub fn new<R: RandomSource + ?Sized>(
        width: usize,
        height: usize,
        config: NoiseConfig,
        rng: &mut R,
    ) -> NoiseResult<Self> {
        let (cells, table_len) = checked_extent(width, height)?;
        config.validate()?;

        let cache = vec![None; cells];
        let table = PermutationTable::new(table_len, config.selector, rng);

        tracing::debug!(
            width,
            height,
            table_len,
            octaves = config.octaves,
            persistence = config.persistence,
            lacunarity = config.lacunarity,
            frequency = config.frequency,
            "noise field constructed"
        );

        Ok(Self {
            width,
            height,
            config,
            table,
            cache,
            cached: 0,
        })
    }

    /// Builds a field from a freshly constructed default source.
    ///
    /// Fields built this way with equal arguments are identical.
    ///
    /// # Errors
    ///
    /// As [`NoiseField::new`].
    pub fn with_default_source(width: usize, height: usize, config: NoiseConfig) -> NoiseResult<Self> {
        let mut rng = default_source();
        Self::new(width, height, config, &mut rng)
    }

    /// Field width in cells.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Field height in cells.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Octave parameters the field was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &NoiseConfig {
        &self.config
    }

    /// The lattice hash table.
    #[inline]
    #[must_use]
    pub const fn permutation(&self) -> &PermutationTable {
        &self.table
    }

    /// Number of cells computed so far.
    #[inline]
    #[must_use]
    pub const fn cached_cells(&self) -> usize {
        self.cached
    }

    /// Returns true if `(x, y)` is inside the field and already computed.
    #[must_use]
    pub fn is_cached(&self, x: i64, y: i64) -> bool {
        self.locate(x, y)
            .is_some_and(|(col, row)| self.cache[row * self.width + col].is_some())
    }

    /// Fractal noise at `(x, y)` in `[0, 1]`.
    ///
    /// Returns `None` if the coordinate lies outside
    /// `[0, width) x [0, height)`. The first query of a cell runs every
    /// octave; later queries return the cached value unchanged.
    pub fn sample(&mut self, x: i64, y: i64) -> Option<f64> {
        let (col, row) = self.locate(x, y)?;
        Some(self.sample_cell(col, row))
    }

    /// Like [`NoiseField::sample`] but reports out-of-range coordinates.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` with the coordinate and the field extent.
    pub fn sample_checked(&mut self, x: i64, y: i64) -> NoiseResult<f64> {
        let (width, height) = (self.width, self.height);
        self.sample(x, y)
            .ok_or(NoiseError::OutOfRange { x, y, width, height })
    }

    /// Samples every cell and returns the field row-major.
    ///
    /// Cells already cached are returned as-is.
    pub fn render(&mut self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.cache.len());
        for row in 0..self.height {
            for col in 0..self.width {
                out.push(self.sample_cell(col, row));
            }
        }
        out
    }

    /// One octave of lattice noise at `(x, y)`, uncached and unclamped.
    ///
    /// The octave index divides `frequency` by `2^octave` before the lattice
    /// is evaluated. Lattice points (`xf = yf = 0`) always yield exactly 0.5.
    #[must_use]
    pub fn sample_octave(&self, x: usize, y: usize, octave: u32, frequency: f64) -> f64 {
        let freq = frequency / f64::from(octave).exp2();
        let wfreq = self.width as f64 * freq;
        let hfreq = self.height as f64 * freq;

        let (x1, xf, x2) = lattice(x as f64 * freq, wfreq);
        let (y1, yf, y2) = lattice(y as f64 * freq, hfreq);
        let xb = fade(xf);
        let yb = fade(yf);

        // Huge frequencies saturate lattice cells near usize::MAX; reducing the
        // row first keeps `px + y` from overflowing without changing the hash.
        let len = self.table.len();
        let (y1, y2) = (y1 % len, y2 % len);

        let px1 = self.table.lookup(x1);
        let px2 = self.table.lookup(x2);

        let top = lerp(
            xb,
            gradient(self.table.lookup(px1 + y1), xf, yf),
            gradient(self.table.lookup(px2 + y1), xf - 1.0, yf),
        );
        let bot = lerp(
            xb,
            gradient(self.table.lookup(px1 + y2), xf, yf - 1.0),
            gradient(self.table.lookup(px2 + y2), xf - 1.0, yf - 1.0),
        );

        (lerp(yb, top, bot) + 1.0) / 2.0
    }

    fn sample_cell(&mut self, col: usize, row: usize) -> f64 {
        let idx = row * self.width + col;
        if let Some(value) = self.cache[idx] {
            return value;
        }

        let value = self.fractal(col, row);
        self.cache[idx] = Some(value);
        self.cached += 1;

        tracing::trace!(x = col, y = row, value, "noise cell computed");
        value
    }

    fn fractal(&self, col: usize, row: usize) -> f64 {
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = self.config.frequency;

        for octave in 0..self.config.octaves {
            sum += self.sample_octave(col, row, octave, frequency) * amplitude;
            amplitude *= self.config.persistence;
            frequency *= self.config.lacunarity;
        }

        clamp_unit(sum)
    }

    fn locate(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok().filter(|&col| col < self.width)?;
        let row = usize::try_from(y).ok().filter(|&row| row < self.height)?;
        Some((col, row))
    }
}

/// Cell count and permutation table length for a `width x height` field.
fn checked_extent(width: usize, height: usize) -> NoiseResult<(usize, usize)> {
    let invalid = || NoiseError::InvalidDimension { width, height };

    if width == 0 || height == 0 {
        return Err(invalid());
    }

    let cells = width.checked_mul(height).ok_or_else(invalid)?;
    let table_len = width.max(height).checked_mul(2).ok_or_else(invalid)?;

    // Entries hold indices below the table length in a u32.
    if u32::try_from(table_len - 1).is_err() {
        return Err(invalid());
    }

    Ok((cells, table_len))
}

/// Splits a wrapped lattice coordinate into `(cell, fraction, next_cell)`.
#[inline]
fn lattice(coord: f64, period: f64) -> (usize, f64, usize) {
    let wrapped = wrap(coord, period);
    let cell = wrapped.trunc();
    let next = wrap(cell + 1.0, period).trunc();
    (cell as usize, wrapped - cell, next as usize)
}

/// `value mod period`, collapsing to the origin when the period degenerates.
#[inline]
fn wrap(value: f64, period: f64) -> f64 {
    if period > 0.0 && period.is_finite() {
        value % period
    } else {
        0.0
    }
}

/// Clamps to `[0, 1]`; NaN saturates to 1.
#[inline]
fn clamp_unit(value: f64) -> f64 {
    if value <= 0.0 {
        0.0
    } else if value <= 1.0 {
        value
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::SelectorWidth;
    use tilenoise_random::Xoroshiro128Plus;

    fn field(width: usize, height: usize, config: NoiseConfig, seed: u64) -> NoiseField {
        NoiseField::new(width, height, config, &mut Xoroshiro128Plus::new(seed)).unwrap()
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        for (w, h) in [(0, 4), (4, 0), (0, 0)] {
            let err = NoiseField::with_default_source(w, h, NoiseConfig::default()).unwrap_err();
            assert!(matches!(
                err,
                NoiseError::InvalidDimension { width, height } if width == w && height == h
            ));
        }
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let err = NoiseField::with_default_source(usize::MAX, 2, NoiseConfig::default()).unwrap_err();
        assert!(matches!(err, NoiseError::InvalidDimension { .. }));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = NoiseConfig::default().with_octaves(0);
        let err = NoiseField::with_default_source(4, 4, config).unwrap_err();
        assert!(matches!(err, NoiseError::InvalidConfig(_)));
    }

    #[test]
    fn test_table_length_follows_larger_side() {
        let f = field(3, 10, NoiseConfig::default(), 1);
        assert_eq!(f.permutation().len(), 20);

        let f = field(12, 5, NoiseConfig::default(), 1);
        assert_eq!(f.permutation().len(), 24);
    }

    #[test]
    fn test_cache_starts_empty_and_fills_once() {
        let mut f = field(8, 8, NoiseConfig::default(), 7);
        assert_eq!(f.cached_cells(), 0);
        assert!(!f.is_cached(2, 3));

        let first = f.sample(2, 3).unwrap();
        assert!(f.is_cached(2, 3));
        assert_eq!(f.cached_cells(), 1);

        let second = f.sample(2, 3).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(f.cached_cells(), 1);
    }

    #[test]
    fn test_out_of_range_is_marker() {
        let mut f = field(5, 7, NoiseConfig::default(), 3);
        assert_eq!(f.sample(-1, 0), None);
        assert_eq!(f.sample(5, 0), None);
        assert_eq!(f.sample(0, -1), None);
        assert_eq!(f.sample(0, 7), None);
        assert_eq!(f.sample(i64::MIN, i64::MAX), None);
        assert_eq!(f.cached_cells(), 0);
        assert!(!f.is_cached(-1, 0));
    }

    #[test]
    fn test_sample_checked_reports_extent() {
        let mut f = field(5, 7, NoiseConfig::default(), 3);
        assert!(f.sample_checked(4, 6).is_ok());

        let err = f.sample_checked(5, 2).unwrap_err();
        assert!(matches!(
            err,
            NoiseError::OutOfRange { x: 5, y: 2, width: 5, height: 7 }
        ));
        assert_eq!(
            err.to_string(),
            "coordinate (5, 2) outside field [0, 5) x [0, 7)"
        );
    }

    #[test]
    fn test_cached_values_survive_table_change() {
        let mut f = field(16, 16, NoiseConfig::default().with_frequency(0.37), 21);
        let before: Vec<f64> = (0..16).map(|i| f.sample(i, 15 - i).unwrap()).collect();

        f.table = PermutationTable::new(32, SelectorWidth::FullIndex, &mut Xoroshiro128Plus::new(999));

        for (i, &value) in (0..16).zip(&before) {
            assert_eq!(f.sample(i, 15 - i).unwrap().to_bits(), value.to_bits());
        }
    }

    #[test]
    fn test_lattice_points_are_half() {
        // frequency 1 puts every integer coordinate on a lattice point.
        let mut f = field(9, 6, NoiseConfig::default().with_frequency(1.0), 5);
        for value in f.render() {
            assert_eq!(value, 0.5);
        }
    }

    #[test]
    fn test_sample_octave_on_lattice_ignores_selector() {
        for selector in [SelectorWidth::FullIndex, SelectorWidth::Gradient3Bit] {
            let f = field(8, 8, NoiseConfig::default().with_selector(selector), 12);
            // octave 1 halves frequency 2.0 back to 1.0
            for x in 0..8 {
                assert_eq!(f.sample_octave(x, 7 - x, 1, 2.0), 0.5);
            }
        }
    }

    #[test]
    fn test_render_covers_every_cell() {
        let mut f = field(6, 4, NoiseConfig::default().with_octaves(3), 8);
        let values = f.render();

        assert_eq!(values.len(), 24);
        assert_eq!(f.cached_cells(), 24);
        for (idx, value) in values.iter().enumerate() {
            assert!((0.0..=1.0).contains(value));
            let (x, y) = ((idx % 6) as i64, (idx / 6) as i64);
            assert_eq!(f.sample(x, y).unwrap().to_bits(), value.to_bits());
        }
    }

    #[test]
    fn test_non_square_high_frequency_stays_in_range() {
        let config = NoiseConfig::default().with_frequency(3.7).with_octaves(5);
        let mut f = field(3, 40, config, 17);
        for value in f.render() {
            assert!((0.0..=1.0).contains(&value), "value {value} out of range");
        }
    }

    #[test]
    fn test_gradient_3bit_field_in_range() {
        let config = NoiseConfig::default()
            .with_selector(SelectorWidth::Gradient3Bit)
            .with_frequency(0.23)
            .with_octaves(4);
        let mut f = field(32, 32, config, 4);
        assert!(f.render().iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_extreme_lacunarity_stays_finite() {
        let config = NoiseConfig::default()
            .with_octaves(64)
            .with_lacunarity(1e-300)
            .with_persistence(1.5);
        let mut f = field(4, 4, config, 2);
        for value in f.render() {
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_extreme_lacunarity_growth_does_not_overflow() {
        let config = NoiseConfig::default().with_octaves(8).with_lacunarity(1000.0);
        let mut f = field(64, 64, config, 1);
        for value in f.render() {
            assert!((0.0..=1.0).contains(&value), "value {value} out of range");
        }
    }

    #[test]
    fn test_huge_base_frequency_does_not_overflow() {
        let mut f = field(4, 4, NoiseConfig::default().with_frequency(1e19), 1);
        let value = f.sample(3, 3).unwrap();
        assert!((0.0..=1.0).contains(&value));
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(-0.2), 0.0);
        assert_eq!(clamp_unit(0.3), 0.3);
        assert_eq!(clamp_unit(1.7), 1.0);
        assert_eq!(clamp_unit(f64::NAN), 1.0);
    }

    #[test]
    fn test_wrap_degenerate_period() {
        assert_eq!(wrap(5.5, 2.0), 1.5);
        assert_eq!(wrap(5.5, 0.0), 0.0);
        assert_eq!(wrap(5.5, f64::INFINITY), 0.0);
    }
}

//! # Shared Field Handles
//!
//! Several owners (renderers, worker threads) probing one field. Every handle
//! points at the same cache, so a cell computed through one handle is a
//! cache hit through all of them. The field is freed when the last handle
//! drops.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::NoiseResult;
use crate::field::NoiseField;

/// Reference-counted, lock-protected handle to a [`NoiseField`].
#[derive(Clone, Debug)]
pub struct SharedNoiseField {
    inner: Arc<Mutex<NoiseField>>,
    width: usize,
    height: usize,
}

impl SharedNoiseField {
    /// Wraps a field in the first handle.
    #[must_use]
    pub fn new(field: NoiseField) -> Self {
        let (width, height) = (field.width(), field.height());
        Self {
            inner: Arc::new(Mutex::new(field)),
            width,
            height,
        }
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

    /// See [`NoiseField::sample`].
    pub fn sample(&self, x: i64, y: i64) -> Option<f64> {
        self.inner.lock().sample(x, y)
    }

    /// See [`NoiseField::sample_checked`].
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` with the coordinate and the field extent.
    pub fn sample_checked(&self, x: i64, y: i64) -> NoiseResult<f64> {
        self.inner.lock().sample_checked(x, y)
    }

    /// Number of cells computed so far, across all handles.
    #[must_use]
    pub fn cached_cells(&self) -> usize {
        self.inner.lock().cached_cells()
    }

    /// Number of live handles to this field.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Recovers the field if this is the last handle.
    ///
    /// # Errors
    ///
    /// Returns the handle unchanged while other handles are alive.
    pub fn try_into_inner(self) -> Result<NoiseField, Self> {
        let (width, height) = (self.width, self.height);
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner, width, height })
    }
}

impl From<NoiseField> for SharedNoiseField {
    fn from(field: NoiseField) -> Self {
        Self::new(field)
    }
}

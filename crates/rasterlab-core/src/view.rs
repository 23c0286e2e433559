//! Read-only image access: the `ImageRead` contract and the observable view.
//!
//! External collaborators (encoders, GUIs) receive an [`ImageView`], which
//! forwards only the read accessors. The view has no transform operation
//! and no way to reach the raster behind it, so a caller holding one
//! cannot produce derived images.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::ImageError;
use crate::raster::Raster;
use crate::Color;

/// Read-only access to an image: dimensions, channel ceiling, and pixel
/// lookup. This is the whole contract handed to untrusted callers.
pub trait ImageRead {
    /// Number of pixel rows.
    fn height(&self) -> usize;

    /// Number of pixel columns.
    fn width(&self) -> usize;

    /// The maximum representable channel value.
    fn ceiling(&self) -> u32;

    /// Look up the color at a location.
    ///
    /// # Errors
    ///
    /// [`ImageError::OutOfBounds`] outside `[0, height) x [0, width)`.
    fn at(&self, row: usize, col: usize) -> Result<Color, ImageError>;
}

impl ImageRead for Raster {
    fn height(&self) -> usize {
        Raster::height(self)
    }

    fn width(&self) -> usize {
        Raster::width(self)
    }

    fn ceiling(&self) -> u32 {
        Raster::ceiling(self)
    }

    fn at(&self, row: usize, col: usize) -> Result<Color, ImageError> {
        Raster::at(self, row, col)
    }
}

/// A read-only view over a raster.
///
/// Cloning is cheap: views share the immutable pixel storage. Equality and
/// hashing forward to the underlying raster's structural versions.
#[derive(Debug, Clone)]
pub struct ImageView {
    inner: Arc<Raster>,
}

impl ImageView {
    pub(crate) fn new(inner: Arc<Raster>) -> Self {
        Self { inner }
    }

    /// Number of pixel rows.
    pub fn height(&self) -> usize {
        self.inner.height()
    }

    /// Number of pixel columns.
    pub fn width(&self) -> usize {
        self.inner.width()
    }

    /// The maximum representable channel value.
    pub fn ceiling(&self) -> u32 {
        self.inner.ceiling()
    }

    /// Look up the color at a location.
    ///
    /// # Errors
    ///
    /// [`ImageError::OutOfBounds`] outside `[0, height) x [0, width)`.
    pub fn at(&self, row: usize, col: usize) -> Result<Color, ImageError> {
        self.inner.at(row, col)
    }

    /// Unchecked pixel read for in-crate loops with in-bounds indices.
    pub(crate) fn pixel(&self, row: usize, col: usize) -> Color {
        self.inner.pixel(row, col)
    }
}

impl From<Raster> for ImageView {
    fn from(raster: Raster) -> Self {
        Self::new(Arc::new(raster))
    }
}

impl ImageRead for ImageView {
    fn height(&self) -> usize {
        ImageView::height(self)
    }

    fn width(&self) -> usize {
        ImageView::width(self)
    }

    fn ceiling(&self) -> u32 {
        ImageView::ceiling(self)
    }

    fn at(&self, row: usize, col: usize) -> Result<Color, ImageError> {
        ImageView::at(self, row, col)
    }
}

impl PartialEq for ImageView {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for ImageView {}

impl Hash for ImageView {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

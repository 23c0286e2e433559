//! The image store: a name-keyed mapping from identifiers to rasters.
//!
//! Inserting under an existing name replaces the prior raster silently;
//! no history is kept. Dropping the overwritten entry is safe because
//! rasters are immutable and any view handed out earlier keeps its own
//! shared reference. The store itself carries no synchronization - an
//! embedding that shares it across threads must add its own lock.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ImageError;
use crate::macros::Macro;
use crate::raster::Raster;
use crate::view::ImageView;
use crate::Color;

/// Name-keyed storage for the images a session works on.
#[derive(Debug, Default)]
pub struct ImageStore {
    images: HashMap<String, Arc<Raster>>,
}

impl ImageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a raster from a raw pixel grid and store it under `name`,
    /// replacing any previous image of that name.
    ///
    /// # Errors
    ///
    /// [`ImageError::EmptyName`], or any raster construction error
    /// (zero ceiling, ragged grid).
    pub fn create(
        &mut self,
        grid: Vec<Vec<Color>>,
        name: &str,
        ceiling: u32,
    ) -> Result<(), ImageError> {
        if name.is_empty() {
            return Err(ImageError::EmptyName);
        }
        let raster = Raster::from_grid(grid, ceiling)?;
        self.images.insert(name.to_string(), Arc::new(raster));
        Ok(())
    }

    /// Run a macro against the image stored under `source` and store the
    /// result under `dest`, replacing any previous image of that name.
    ///
    /// `dest` may equal `source`: the stored entry is swapped for the new
    /// raster while the original raster object stays untouched behind any
    /// outstanding view.
    ///
    /// # Errors
    ///
    /// [`ImageError::EmptyName`] for an empty source or destination,
    /// [`ImageError::UnknownImage`] when `source` is not stored, and
    /// whatever error the macro itself produces.
    pub fn run_command(
        &mut self,
        command: &dyn Macro,
        source: &str,
        dest: &str,
    ) -> Result<(), ImageError> {
        if source.is_empty() || dest.is_empty() {
            return Err(ImageError::EmptyName);
        }
        let raster = self
            .images
            .get(source)
            .ok_or_else(|| ImageError::UnknownImage(source.to_string()))?;
        let result = command.execute(raster)?;
        self.images.insert(dest.to_string(), Arc::new(result));
        Ok(())
    }

    /// Look up an image and return a read-only view over it.
    ///
    /// # Errors
    ///
    /// [`ImageError::EmptyName`] or [`ImageError::UnknownImage`].
    pub fn get(&self, name: &str) -> Result<ImageView, ImageError> {
        if name.is_empty() {
            return Err(ImageError::EmptyName);
        }
        self.images
            .get(name)
            .map(|raster| ImageView::new(Arc::clone(raster)))
            .ok_or_else(|| ImageError::UnknownImage(name.to_string()))
    }

    /// Whether an image is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// Number of stored images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the store holds no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

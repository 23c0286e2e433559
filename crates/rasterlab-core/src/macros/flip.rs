//! Axis flips: mirror an image horizontally or vertically.

use crate::error::ImageError;
use crate::macros::Macro;
use crate::raster::Raster;

/// Mirrors the image left-to-right.
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalFlip;

impl Macro for HorizontalFlip {
    fn execute(&self, img: &Raster) -> Result<Raster, ImageError> {
        let width = img.width();
        Ok(img.transform(|_, row, col| img.pixel(row, width - 1 - col)))
    }
}

/// Mirrors the image top-to-bottom.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerticalFlip;

impl Macro for VerticalFlip {
    fn execute(&self, img: &Raster) -> Result<Raster, ImageError> {
        let height = img.height();
        Ok(img.transform(|_, row, col| img.pixel(height - 1 - row, col)))
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

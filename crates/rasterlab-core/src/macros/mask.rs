//! Masked composition: confine any macro to a selector-marked region.

use crate::error::ImageError;
use crate::macros::Macro;
use crate::raster::Raster;
use crate::view::ImageView;
use crate::Color;

/// Wraps another macro and applies it only where a same-sized selector
/// image holds a pure black pixel; everywhere else the original pixel
/// passes through unchanged.
///
/// The inner macro runs over the whole image; the selector decides which
/// of its pixels survive into the result. This keeps every macro usable
/// regionally without duplicating its logic.
pub struct Mask {
    inner: Box<dyn Macro>,
    selector: ImageView,
}

impl Mask {
    /// Wrap `inner` so it only applies where `selector` is black.
    pub fn new(inner: Box<dyn Macro>, selector: ImageView) -> Self {
        Self { inner, selector }
    }
}

impl Macro for Mask {
    fn execute(&self, img: &Raster) -> Result<Raster, ImageError> {
        if img.height() != self.selector.height() || img.width() != self.selector.width() {
            return Err(ImageError::SelectorSizeMismatch {
                selector_height: self.selector.height(),
                selector_width: self.selector.width(),
                height: img.height(),
                width: img.width(),
            });
        }

        let edited = self.inner.execute(img)?;
        if edited.height() != self.selector.height() || edited.width() != self.selector.width() {
            return Err(ImageError::ResultSizeMismatch {
                result_height: edited.height(),
                result_width: edited.width(),
                height: self.selector.height(),
                width: self.selector.width(),
            });
        }

        let black = Color::new(0, 0, 0);
        Ok(img.transform(|original, row, col| {
            if self.selector.pixel(row, col) == black {
                edited.pixel(row, col)
            } else {
                original
            }
        }))
    }
}

//! Histogram computation over any readable image.
//!
//! Produces the bin counts an edit view charts: one line per color
//! channel plus intensity. The chart itself belongs to the front-end;
//! only the data lives here.

use crate::error::ImageError;
use crate::view::ImageRead;
use crate::Histogram;

/// Compute channel and intensity histograms in a single pass.
///
/// Bins are sized to the image's ceiling, so every representable channel
/// value has a bin and clamped extremes land in the first and last bins.
///
/// # Errors
///
/// Propagates any lookup failure from the underlying image; a well-formed
/// raster or view never produces one.
pub fn compute_histogram(img: &impl ImageRead) -> Result<Histogram, ImageError> {
    let mut hist = Histogram::new(img.ceiling());

    for row in 0..img.height() {
        for col in 0..img.width() {
            let c = img.at(row, col)?;
            hist.red[c.red as usize] += 1;
            hist.green[c.green as usize] += 1;
            hist.blue[c.blue as usize] += 1;
            hist.intensity[c.intensity() as usize] += 1;
        }
    }

    Ok(hist)
}

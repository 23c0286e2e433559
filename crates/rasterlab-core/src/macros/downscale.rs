//! Bilinear-resampled downscaling.
//!
//! Each target pixel maps back to a fractional source coordinate and
//! blends the four surrounding source pixels. This is a resampling
//! filter, not a crop: the whole source contributes to the output.

use crate::error::ImageError;
use crate::macros::Macro;
use crate::raster::Raster;
use crate::Color;

/// Resamples an image down to a target size no larger than the source.
#[derive(Debug, Clone, Copy)]
pub struct Downscale {
    height: usize,
    width: usize,
}

impl Downscale {
    /// Create a downscale macro targeting `height x width`.
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }
}

impl Macro for Downscale {
    fn execute(&self, img: &Raster) -> Result<Raster, ImageError> {
        if self.height == 0 || self.width == 0 {
            return Err(ImageError::ScaleTargetZero {
                height: self.height,
                width: self.width,
            });
        }
        if self.height > img.height() || self.width > img.width() {
            return Err(ImageError::ScaleTargetTooLarge {
                target_height: self.height,
                target_width: self.width,
                source_height: img.height(),
                source_width: img.width(),
            });
        }

        let mut pixels = Vec::with_capacity(self.height * self.width);
        for y in 0..self.height {
            for x in 0..self.width {
                let src_y = (y * img.height()) as f64 / self.height as f64;
                let src_x = (x * img.width()) as f64 / self.width as f64;
                pixels.push(Color::new(
                    interpolate(img, src_y, src_x, |c| c.red),
                    interpolate(img, src_y, src_x, |c| c.green),
                    interpolate(img, src_y, src_x, |c| c.blue),
                ));
            }
        }
        Ok(Raster::from_parts(
            pixels,
            self.height,
            self.width,
            img.ceiling(),
        ))
    }
}

/// Bilinear blend of one channel at a fractional source coordinate.
///
/// The +1 sample index is clamped to the last row/column at the boundary
/// while the interpolation weights stay `frac` / `1 - frac`; the blended
/// value is truncated toward zero. This edge convention is load-bearing
/// for output compatibility - keep it even though alternatives exist.
fn interpolate(img: &Raster, y: f64, x: f64, channel: impl Fn(Color) -> u32) -> u32 {
    let y0 = y as usize;
    let x0 = x as usize;
    let y1 = (y0 + 1).min(img.height() - 1);
    let x1 = (x0 + 1).min(img.width() - 1);
    let fy = y - y0 as f64;
    let fx = x - x0 as f64;

    let a = channel(img.pixel(y0, x0)) as f64;
    let b = channel(img.pixel(y0, x1)) as f64;
    let c = channel(img.pixel(y1, x0)) as f64;
    let d = channel(img.pixel(y1, x1)) as f64;

    let top = b * fx + a * (1.0 - fx);
    let bottom = d * fx + c * (1.0 - fx);
    (bottom * fy + top * (1.0 - fy)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(height: usize, width: usize) -> Raster {
        let grid = (0..height)
            .map(|row| {
                (0..width)
                    .map(|col| {
                        let v = (row * width + col) as u32;
                        Color::new(v, v * 2, v * 3)
                    })
                    .collect()
            })
            .collect();
        Raster::from_grid(grid, 255).unwrap()
    }

    // ===== Precondition Tests =====

    #[test]
    fn test_zero_target_rejected() {
        let img = gradient(4, 4);
        assert_eq!(
            Downscale::new(0, 2).execute(&img),
            Err(ImageError::ScaleTargetZero {
                height: 0,
                width: 2,
            })
        );
        assert_eq!(
            Downscale::new(2, 0).execute(&img),
            Err(ImageError::ScaleTargetZero {
                height: 2,
                width: 0,
            })
        );
    }

    #[test]
    fn test_oversized_target_rejected() {
        let img = gradient(4, 4);
        assert_eq!(
            Downscale::new(5, 4).execute(&img),
            Err(ImageError::ScaleTargetTooLarge {
                target_height: 5,
                target_width: 4,
                source_height: 4,
                source_width: 4,
            })
        );
        assert!(Downscale::new(4, 9).execute(&img).is_err());
    }

    // ===== Resampling Tests =====

    #[test]
    fn test_same_size_target_succeeds() {
        let img = gradient(4, 3);
        let out = Downscale::new(4, 3).execute(&img).unwrap();
        assert_eq!(out.height(), 4);
        assert_eq!(out.width(), 3);
        // Integer source coordinates land exactly on the original pixels.
        assert_eq!(out, img);
    }

    #[test]
    fn test_output_has_requested_dimensions() {
        let img = gradient(10, 8);
        let out = Downscale::new(3, 5).execute(&img).unwrap();
        assert_eq!(out.height(), 3);
        assert_eq!(out.width(), 5);
        assert_eq!(out.ceiling(), 255);
    }

    #[test]
    fn test_halving_samples_even_pixels_of_uniform_rows() {
        // Rows of constant color: halving the width must reproduce the
        // row colors exactly, whatever the column weights do.
        let grid = vec![
            vec![Color::new(10, 10, 10); 4],
            vec![Color::new(40, 40, 40); 4],
        ];
        let img = Raster::from_grid(grid, 255).unwrap();
        let out = Downscale::new(2, 2).execute(&img).unwrap();
        assert_eq!(out.at(0, 0).unwrap(), Color::new(10, 10, 10));
        assert_eq!(out.at(1, 1).unwrap(), Color::new(40, 40, 40));
    }

    #[test]
    fn test_fractional_coordinate_blends_neighbors() {
        // 3 -> 2 columns puts target x=1 at source x=1.5: halfway between
        // columns 1 and 2.
        let grid = vec![vec![
            Color::new(0, 0, 0),
            Color::new(100, 100, 100),
            Color::new(200, 200, 200),
        ]];
        let img = Raster::from_grid(grid, 255).unwrap();
        let out = Downscale::new(1, 2).execute(&img).unwrap();
        assert_eq!(out.at(0, 0).unwrap(), Color::new(0, 0, 0));
        assert_eq!(out.at(0, 1).unwrap(), Color::new(150, 150, 150));
    }

    #[test]
    fn test_single_pixel_target() {
        let img = gradient(6, 6);
        let out = Downscale::new(1, 1).execute(&img).unwrap();
        // Target (0, 0) maps to source (0.0, 0.0): the top-left pixel.
        assert_eq!(out.at(0, 0).unwrap(), img.at(0, 0).unwrap());
    }

    #[test]
    fn test_source_is_not_mutated() {
        let img = gradient(4, 4);
        let before = img.clone();
        let _ = Downscale::new(2, 2).execute(&img).unwrap();
        assert_eq!(img, before);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

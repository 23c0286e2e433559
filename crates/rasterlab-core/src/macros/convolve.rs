//! Convolution filtering over a square, odd-sized kernel.

use crate::error::ImageError;
use crate::macros::Macro;
use crate::raster::Raster;
use crate::Color;

/// A square convolution kernel with odd side length.
///
/// Validity (non-empty, odd, square) is established at construction and
/// holds for the kernel's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    side: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Validate and build a kernel from its weight rows.
    ///
    /// # Errors
    ///
    /// - [`ImageError::EmptyKernel`] for zero rows
    /// - [`ImageError::EvenKernel`] for an even row count
    /// - [`ImageError::NonSquareKernel`] when any row's length differs
    ///   from the row count
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, ImageError> {
        let side = rows.len();
        if side == 0 {
            return Err(ImageError::EmptyKernel);
        }
        if side % 2 == 0 {
            return Err(ImageError::EvenKernel(side));
        }
        for (row, weights) in rows.iter().enumerate() {
            if weights.len() != side {
                return Err(ImageError::NonSquareKernel {
                    row,
                    expected: side,
                    actual: weights.len(),
                });
            }
        }
        Ok(Self {
            side,
            weights: rows.into_iter().flatten().collect(),
        })
    }

    /// The canonical 3x3 Gaussian-like blur kernel.
    pub fn gaussian_blur() -> Self {
        Self {
            side: 3,
            weights: vec![
                1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0,
                1.0 / 8.0, 1.0 / 4.0, 1.0 / 8.0,
                1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0,
            ],
        }
    }

    /// The canonical 5x5 sharpen kernel: center 1, inner ring 1/4, outer
    /// ring -1/8.
    pub fn sharpen() -> Self {
        const E: f64 = -1.0 / 8.0;
        const I: f64 = 1.0 / 4.0;
        Self {
            side: 5,
            weights: vec![
                E, E, E, E, E,
                E, I, I, I, E,
                E, I, 1.0, I, E,
                E, I, I, I, E,
                E, E, E, E, E,
            ],
        }
    }

    /// Side length of the kernel.
    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    fn weight(&self, row: usize, col: usize) -> f64 {
        self.weights[row * self.side + col]
    }
}

/// Recombines each pixel from its neighborhood, weighted by a [`Kernel`].
///
/// Footprint positions that fall outside the raster contribute zero;
/// they are skipped, not reflected or wrapped. Channel sums are truncated
/// toward zero and then clamped into the image's channel range.
#[derive(Debug, Clone)]
pub struct Convolve {
    kernel: Kernel,
}

impl Convolve {
    /// Create a convolution macro over the given kernel.
    pub fn new(kernel: Kernel) -> Self {
        Self { kernel }
    }

    /// Blur: convolution over [`Kernel::gaussian_blur`].
    pub fn blur() -> Self {
        Self::new(Kernel::gaussian_blur())
    }

    /// Sharpen: convolution over [`Kernel::sharpen`].
    pub fn sharpen() -> Self {
        Self::new(Kernel::sharpen())
    }
}

impl Macro for Convolve {
    fn execute(&self, img: &Raster) -> Result<Raster, ImageError> {
        let center = (self.kernel.side() / 2) as isize;
        let height = img.height() as isize;
        let width = img.width() as isize;

        Ok(img.transform(|_, row, col| {
            let mut r = 0.0;
            let mut g = 0.0;
            let mut b = 0.0;
            for i in 0..self.kernel.side() {
                for j in 0..self.kernel.side() {
                    let y = row as isize + i as isize - center;
                    let x = col as isize + j as isize - center;
                    if y < 0 || y >= height || x < 0 || x >= width {
                        continue;
                    }
                    let sample = img.pixel(y as usize, x as usize);
                    let weight = self.kernel.weight(i, j);
                    r += sample.red as f64 * weight;
                    g += sample.green as f64 * weight;
                    b += sample.blue as f64 * weight;
                }
            }
            Color::from_signed(r as i64, g as i64, b as i64)
        }))
    }
}

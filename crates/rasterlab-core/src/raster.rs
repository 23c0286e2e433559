//! The immutable raster: a rectangular grid of colors plus a channel ceiling.
//!
//! Every transformation allocates a complete new raster; a published raster
//! is never mutated and stays valid for as long as any holder keeps it.
//! Out-of-range channel values are resolved by clamping against the ceiling
//! at this boundary - construction and `transform` both clamp, never reject.

use crate::error::ImageError;
use crate::Color;

/// An immutable image: `height * width` colors in row-major order and the
/// maximum representable channel value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Raster {
    height: usize,
    width: usize,
    ceiling: u32,
    pixels: Vec<Color>,
}

impl Raster {
    /// Build a raster from a 2-D pixel grid.
    ///
    /// Height is the number of rows; width is row 0's length (0 for an
    /// empty grid). Channel values above the ceiling are clamped into
    /// range rather than rejected.
    ///
    /// # Errors
    ///
    /// - [`ImageError::ZeroCeiling`] if `ceiling` is 0
    /// - [`ImageError::RaggedGrid`] if any row's length differs from row 0's
    pub fn from_grid(grid: Vec<Vec<Color>>, ceiling: u32) -> Result<Self, ImageError> {
        if ceiling == 0 {
            return Err(ImageError::ZeroCeiling);
        }

        let height = grid.len();
        let width = grid.first().map_or(0, Vec::len);

        let mut pixels = Vec::with_capacity(height * width);
        for (row, colors) in grid.into_iter().enumerate() {
            if colors.len() != width {
                return Err(ImageError::RaggedGrid {
                    row,
                    expected: width,
                    actual: colors.len(),
                });
            }
            pixels.extend(colors.into_iter().map(|c| clamp_to_ceiling(c, ceiling)));
        }

        Ok(Self {
            height,
            width,
            ceiling,
            pixels,
        })
    }

    /// Build a raster from an already-flat pixel buffer.
    ///
    /// Callers guarantee `pixels.len() == height * width`; channels are
    /// still clamped so the ceiling invariant holds unconditionally.
    pub(crate) fn from_parts(
        pixels: Vec<Color>,
        height: usize,
        width: usize,
        ceiling: u32,
    ) -> Self {
        debug_assert_eq!(pixels.len(), height * width, "pixel buffer size mismatch");
        let pixels = pixels
            .into_iter()
            .map(|c| clamp_to_ceiling(c, ceiling))
            .collect();
        Self {
            height,
            width,
            ceiling,
            pixels,
        }
    }

    /// Number of pixel rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixel columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The maximum representable channel value.
    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Look up the color at a location.
    ///
    /// # Errors
    ///
    /// [`ImageError::OutOfBounds`] outside `[0, height) x [0, width)`.
    pub fn at(&self, row: usize, col: usize) -> Result<Color, ImageError> {
        if row >= self.height || col >= self.width {
            return Err(ImageError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(self.pixels[row * self.width + col])
    }

    /// Unchecked pixel read for in-crate loops whose indices are already
    /// known to be in bounds.
    pub(crate) fn pixel(&self, row: usize, col: usize) -> Color {
        self.pixels[row * self.width + col]
    }

    /// Produce a new raster by mapping every coordinate.
    ///
    /// `map` receives the pre-transform color and its location. All reads
    /// performed inside `map` see the original raster, never a partially
    /// updated one, so neighborhood transforms stay well defined. Every
    /// produced channel is clamped into `[0, ceiling]`.
    pub fn transform<F>(&self, map: F) -> Raster
    where
        F: Fn(Color, usize, usize) -> Color,
    {
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for row in 0..self.height {
            for col in 0..self.width {
                let mapped = map(self.pixels[row * self.width + col], row, col);
                pixels.push(clamp_to_ceiling(mapped, self.ceiling));
            }
        }
        Raster {
            height: self.height,
            width: self.width,
            ceiling: self.ceiling,
            pixels,
        }
    }
}

/// Pull every channel down to the ceiling. The lower bound needs no work:
/// channels are unsigned.
#[inline]
fn clamp_to_ceiling(c: Color, ceiling: u32) -> Color {
    Color::new(
        c.red.min(ceiling),
        c.green.min(ceiling),
        c.blue.min(ceiling),
    )
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for a grid of arbitrary channel values, including values
    /// far above any ceiling under test.
    fn grid_strategy() -> impl Strategy<Value = Vec<Vec<Color>>> {
        let color = (0u32..=1000, 0u32..=1000, 0u32..=1000)
            .prop_map(|(r, g, b)| Color::new(r, g, b));
        (1usize..=8, 1usize..=8).prop_flat_map(move |(h, w)| {
            proptest::collection::vec(proptest::collection::vec(color.clone(), w), h)
        })
    }

    proptest! {
        /// Property: every channel read back from a raster lies in
        /// [0, ceiling], whatever the input grid contained.
        #[test]
        fn prop_clamping_idempotence(grid in grid_strategy(), ceiling in 1u32..=512) {
            let img = Raster::from_grid(grid, ceiling).unwrap();
            for row in 0..img.height() {
                for col in 0..img.width() {
                    let c = img.at(row, col).unwrap();
                    prop_assert!(c.red <= ceiling);
                    prop_assert!(c.green <= ceiling);
                    prop_assert!(c.blue <= ceiling);
                }
            }
        }

        /// Property: a transform never mutates its source.
        #[test]
        fn prop_transform_purity(grid in grid_strategy()) {
            let img = Raster::from_grid(grid, 255).unwrap();
            let before = img.clone();
            let _ = img.transform(|c, _, _| Color::new(c.blue, c.red, c.green));
            prop_assert_eq!(img, before);
        }

        /// Property: transform preserves dimensions and ceiling.
        #[test]
        fn prop_transform_preserves_shape(grid in grid_strategy()) {
            let img = Raster::from_grid(grid, 255).unwrap();
            let out = img.transform(|c, _, _| c);
            prop_assert_eq!(out.height(), img.height());
            prop_assert_eq!(out.width(), img.width());
            prop_assert_eq!(out.ceiling(), img.ceiling());
        }
    }
}

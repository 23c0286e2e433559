//! 3x3 linear color-matrix mixing.

use crate::error::ImageError;
use crate::macros::Macro;
use crate::raster::Raster;
use crate::Color;

/// Greyscale coefficient rows (the luma-like weighting repeated per channel).
const GREYSCALE: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.393, 0.769, 0.189],
    [0.393, 0.769, 0.189],
];

/// Sepia tone coefficient rows.
const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Recombines each pixel's channels through a 3x3 matrix: output channel
/// `i` is row `i` dotted with `(r, g, b)`, truncated toward zero and then
/// clamped into the image's channel range.
///
/// The 3x3 shape is carried by the type, so a malformed matrix cannot be
/// constructed.
#[derive(Debug, Clone, Copy)]
pub struct MatrixTransform {
    matrix: [[f64; 3]; 3],
}

impl MatrixTransform {
    /// Create a matrix-mixing macro from its coefficient rows.
    pub fn new(matrix: [[f64; 3]; 3]) -> Self {
        Self { matrix }
    }

    /// The canonical greyscale mix.
    pub fn greyscale() -> Self {
        Self::new(GREYSCALE)
    }

    /// The canonical sepia mix.
    pub fn sepia() -> Self {
        Self::new(SEPIA)
    }
}

impl Macro for MatrixTransform {
    fn execute(&self, img: &Raster) -> Result<Raster, ImageError> {
        let m = self.matrix;
        Ok(img.transform(|c, _, _| {
            Color::from_signed(mix(&m[0], c), mix(&m[1], c), mix(&m[2], c))
        }))
    }
}

/// One output channel: a coefficient row dotted with the pixel's channels,
/// truncated toward zero.
#[inline]
fn mix(row: &[f64; 3], c: Color) -> i64 {
    (row[0] * c.red as f64 + row[1] * c.green as f64 + row[2] * c.blue as f64) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sepia_known_pixel() {
        let img = Raster::from_grid(vec![vec![Color::new(100, 50, 25)]], 255).unwrap();
        let out = MatrixTransform::sepia().execute(&img).unwrap();
        // r' = 0.393*100 + 0.769*50 + 0.189*25 = 82.475 -> 82
        // g' = 0.349*100 + 0.686*50 + 0.168*25 = 73.4   -> 73
        // b' = 0.272*100 + 0.534*50 + 0.131*25 = 57.175 -> 57
        assert_eq!(out.at(0, 0).unwrap(), Color::new(82, 73, 57));
    }

    #[test]
    fn test_greyscale_equalizes_channels() {
        let img = Raster::from_grid(vec![vec![Color::new(100, 50, 25)]], 255).unwrap();
        let out = MatrixTransform::greyscale().execute(&img).unwrap();
        let c = out.at(0, 0).unwrap();
        assert_eq!(c.red, c.green);
        assert_eq!(c.green, c.blue);
        assert_eq!(c.red, 82);
    }

    #[test]
    fn test_overshoot_clamps_to_ceiling() {
        // Greyscale weights sum to 1.351, so a bright pixel overshoots.
        let img = Raster::from_grid(vec![vec![Color::new(255, 255, 255)]], 255).unwrap();
        let out = MatrixTransform::greyscale().execute(&img).unwrap();
        assert_eq!(out.at(0, 0).unwrap(), Color::new(255, 255, 255));
    }

    #[test]
    fn test_negative_coefficients_clamp_to_zero() {
        let invert = MatrixTransform::new([
            [-1.0, 0.0, 0.0],
            [0.0, -1.0, 0.0],
            [0.0, 0.0, -1.0],
        ]);
        let img = Raster::from_grid(vec![vec![Color::new(10, 20, 30)]], 255).unwrap();
        let out = invert.execute(&img).unwrap();
        assert_eq!(out.at(0, 0).unwrap(), Color::new(0, 0, 0));
    }

    #[test]
    fn test_identity_matrix_is_identity() {
        let identity =
            MatrixTransform::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let img = Raster::from_grid(
            vec![vec![Color::new(5, 10, 15), Color::new(200, 100, 0)]],
            255,
        )
        .unwrap();
        assert_eq!(identity.execute(&img).unwrap(), img);
    }
}

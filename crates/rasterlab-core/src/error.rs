//! Error types for raster construction, transformation, and the image store.

use thiserror::Error;

/// Error type for every fallible engine operation.
///
/// All failures are synchronous precondition violations that propagate to
/// the immediate caller; nothing is retried or silently swallowed.
/// Channel-range overshoot is explicitly not an error anywhere in the
/// engine - it is resolved by clamping at the raster boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The channel ceiling must be a positive integer.
    #[error("Channel ceiling must be at least 1")]
    ZeroCeiling,

    /// A grid row's length differs from the width set by row 0.
    #[error("Grid is not rectangular: row {row} has {actual} pixels, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Pixel lookup outside `[0, height) x [0, width)`.
    #[error("Pixel location ({row}, {col}) is outside a {height}x{width} image")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// A convolution kernel with no rows.
    #[error("Kernel must have at least one row")]
    EmptyKernel,

    /// A convolution kernel with an even side length.
    #[error("Kernel side length {0} must be odd")]
    EvenKernel(usize),

    /// A convolution kernel row whose length differs from the row count.
    #[error("Kernel must be square: row {row} has {actual} weights, expected {expected}")]
    NonSquareKernel {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// An empty string where an image name is required.
    #[error("Image name must not be empty")]
    EmptyName,

    /// A lookup for a name the store does not hold.
    #[error("No image named {0:?} in the store")]
    UnknownImage(String),

    /// A mask selector whose dimensions differ from the image's.
    #[error(
        "Selector image is {selector_height}x{selector_width} \
         but the image is {height}x{width}"
    )]
    SelectorSizeMismatch {
        selector_height: usize,
        selector_width: usize,
        height: usize,
        width: usize,
    },

    /// A masked macro whose result no longer matches the selector's size.
    #[error(
        "Masked macro changed the image dimensions from {height}x{width} \
         to {result_height}x{result_width}"
    )]
    ResultSizeMismatch {
        result_height: usize,
        result_width: usize,
        height: usize,
        width: usize,
    },

    /// A downscale target with a zero dimension.
    #[error("Downscale target {height}x{width} must be positive in both dimensions")]
    ScaleTargetZero { height: usize, width: usize },

    /// A downscale target larger than the source image.
    #[error(
        "Downscale target {target_height}x{target_width} exceeds \
         the {source_height}x{source_width} source"
    )]
    ScaleTargetTooLarge {
        target_height: usize,
        target_width: usize,
        source_height: usize,
        source_width: usize,
    },
}

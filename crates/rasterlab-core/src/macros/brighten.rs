//! Linear brightness shift.

use crate::error::ImageError;
use crate::macros::Macro;
use crate::raster::Raster;
use crate::Color;

/// Shifts every channel of every pixel by a fixed amount, clamping at 0
/// and at the image's ceiling. A negative amount darkens.
#[derive(Debug, Clone, Copy)]
pub struct Brighten {
    amount: i64,
}

impl Brighten {
    /// Create a brightness-shift macro. `amount` may be negative.
    pub fn new(amount: i64) -> Self {
        Self { amount }
    }
}

impl Macro for Brighten {
    fn execute(&self, img: &Raster) -> Result<Raster, ImageError> {
        let max = img.ceiling() as i64;
        let amount = self.amount;
        let shift = |channel: u32| (channel as i64 + amount).clamp(0, max) as u32;
        Ok(img.transform(|c, _, _| Color::new(shift(c.red), shift(c.green), shift(c.blue))))
    }
}

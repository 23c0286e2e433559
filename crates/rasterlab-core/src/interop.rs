//! Conversions between [`Raster`] and the `image` crate's RGB buffers.
//!
//! This is the hand-off point to decoder/encoder layers: parsers produce
//! an `RgbImage` and enter the engine through `from_rgb_image`; encoders
//! read a finished raster back out through `to_rgb_image`.

use crate::raster::Raster;
use crate::Color;

impl Raster {
    /// Build a raster from a decoded 8-bit RGB image, with ceiling 255.
    pub fn from_rgb_image(img: &image::RgbImage) -> Raster {
        let (width, height) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| Color::new(p[0] as u32, p[1] as u32, p[2] as u32))
            .collect();
        Raster::from_parts(pixels, height as usize, width as usize, 255)
    }

    /// Convert to an 8-bit RGB image for encoding.
    ///
    /// Channels are rescaled proportionally when the ceiling differs from
    /// 255, so a ceiling-7 image still spans the full 8-bit range.
    /// Returns `None` only if the buffer dimensions cannot form an
    /// `RgbImage`.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        let ceiling = self.ceiling();
        let mut buf = Vec::with_capacity(self.height() * self.width() * 3);
        for row in 0..self.height() {
            for col in 0..self.width() {
                let c = self.pixel(row, col);
                buf.push(scale_channel(c.red, ceiling));
                buf.push(scale_channel(c.green, ceiling));
                buf.push(scale_channel(c.blue, ceiling));
            }
        }
        image::RgbImage::from_raw(self.width() as u32, self.height() as u32, buf)
    }
}

/// Rescale a channel from `[0, ceiling]` onto `[0, 255]`.
#[inline]
fn scale_channel(v: u32, ceiling: u32) -> u8 {
    if ceiling == 255 {
        v as u8
    } else {
        ((v as u64 * 255) / ceiling as u64) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_at_ceiling_255() {
        let mut img = image::RgbImage::new(2, 2);
        img.put_pixel(0, 0, image::Rgb([10, 20, 30]));
        img.put_pixel(1, 0, image::Rgb([40, 50, 60]));
        img.put_pixel(0, 1, image::Rgb([70, 80, 90]));
        img.put_pixel(1, 1, image::Rgb([255, 0, 128]));

        let raster = Raster::from_rgb_image(&img);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.width(), 2);
        assert_eq!(raster.ceiling(), 255);
        assert_eq!(raster.at(0, 1).unwrap(), Color::new(40, 50, 60));

        let back = raster.to_rgb_image().unwrap();
        assert_eq!(back.dimensions(), img.dimensions());
        assert_eq!(back.as_raw(), img.as_raw());
    }

    #[test]
    fn test_small_ceiling_rescales_to_full_range() {
        let grid = vec![vec![
            Color::new(0, 0, 0),
            Color::new(7, 7, 7),
            Color::new(3, 3, 3),
        ]];
        let raster = Raster::from_grid(grid, 7).unwrap();
        let img = raster.to_rgb_image().unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255]);
        // 3 * 255 / 7 = 109
        assert_eq!(img.get_pixel(2, 0).0, [109, 109, 109]);
    }

    #[test]
    fn test_rgb_image_rows_map_to_raster_rows() {
        let mut img = image::RgbImage::new(3, 1);
        img.put_pixel(2, 0, image::Rgb([9, 9, 9]));
        let raster = Raster::from_rgb_image(&img);
        assert_eq!(raster.height(), 1);
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.at(0, 2).unwrap(), Color::new(9, 9, 9));
    }
}

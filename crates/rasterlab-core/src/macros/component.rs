//! Component extraction: collapse every pixel to one scalar reading.

use crate::error::ImageError;
use crate::macros::Macro;
use crate::raster::Raster;
use crate::Color;

/// The scalar reading a [`Component`] macro extracts from each pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Channel {
    /// The red channel value.
    Red,
    /// The green channel value.
    Green,
    /// The blue channel value.
    Blue,
    /// The largest channel value.
    Value,
    /// The floor of the channel mean.
    Intensity,
    /// The BT.709 weighted sum, floored.
    Luma,
}

impl Channel {
    /// Read this channel's scalar from a color.
    pub fn extract(self, color: Color) -> u32 {
        match self {
            Channel::Red => color.red,
            Channel::Green => color.green,
            Channel::Blue => color.blue,
            Channel::Value => color.value(),
            Channel::Intensity => color.intensity(),
            Channel::Luma => color.luma(),
        }
    }
}

/// Replaces every pixel with the grayscale of one scalar reading: all
/// three output channels carry the extracted value.
#[derive(Debug, Clone, Copy)]
pub struct Component {
    channel: Channel,
}

impl Component {
    /// Create a component-extraction macro for the given reading.
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

impl Macro for Component {
    fn execute(&self, img: &Raster) -> Result<Raster, ImageError> {
        let channel = self.channel;
        Ok(img.transform(|c, _, _| {
            let v = channel.extract(c);
            Color::new(v, v, v)
        }))
    }
}

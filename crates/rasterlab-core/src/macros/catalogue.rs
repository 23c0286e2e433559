//! The named macro catalogue.
//!
//! A closed description of every operation a command layer can dispatch,
//! built once at startup and matched exhaustively. Serializable so an
//! embedding session can persist edit recipes. The masked variant of any
//! operation composes at runtime: build the spec, then wrap the result in
//! [`crate::macros::Mask`] with a selector view.

use crate::macros::{
    Brighten, Channel, Component, Convolve, Downscale, HorizontalFlip, Macro, MatrixTransform,
    VerticalFlip,
};

/// One named operation from the command catalogue, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MacroSpec {
    /// `red-component` .. `intensity-component`
    Component(Channel),
    /// `horizontal-flip`
    HorizontalFlip,
    /// `vertical-flip`
    VerticalFlip,
    /// `brighten <n>`
    Brighten(i64),
    /// `blur`
    Blur,
    /// `sharpen`
    Sharpen,
    /// `greyscale`
    Greyscale,
    /// `sepia`
    Sepia,
    /// `downscale <height> <width>`
    Downscale { height: usize, width: usize },
}

impl MacroSpec {
    /// The command name this spec answers to.
    pub fn name(&self) -> &'static str {
        match self {
            MacroSpec::Component(Channel::Red) => "red-component",
            MacroSpec::Component(Channel::Green) => "green-component",
            MacroSpec::Component(Channel::Blue) => "blue-component",
            MacroSpec::Component(Channel::Value) => "value-component",
            MacroSpec::Component(Channel::Luma) => "luma-component",
            MacroSpec::Component(Channel::Intensity) => "intensity-component",
            MacroSpec::HorizontalFlip => "horizontal-flip",
            MacroSpec::VerticalFlip => "vertical-flip",
            MacroSpec::Brighten(_) => "brighten",
            MacroSpec::Blur => "blur",
            MacroSpec::Sharpen => "sharpen",
            MacroSpec::Greyscale => "greyscale",
            MacroSpec::Sepia => "sepia",
            MacroSpec::Downscale { .. } => "downscale",
        }
    }

    /// Instantiate the macro this spec describes.
    pub fn build(&self) -> Box<dyn Macro> {
        match *self {
            MacroSpec::Component(channel) => Box::new(Component::new(channel)),
            MacroSpec::HorizontalFlip => Box::new(HorizontalFlip),
            MacroSpec::VerticalFlip => Box::new(VerticalFlip),
            MacroSpec::Brighten(amount) => Box::new(Brighten::new(amount)),
            MacroSpec::Blur => Box::new(Convolve::blur()),
            MacroSpec::Sharpen => Box::new(Convolve::sharpen()),
            MacroSpec::Greyscale => Box::new(MatrixTransform::greyscale()),
            MacroSpec::Sepia => Box::new(MatrixTransform::sepia()),
            MacroSpec::Downscale { height, width } => Box::new(Downscale::new(height, width)),
        }
    }
}

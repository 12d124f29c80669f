//! Color model shared between the menu overlay and renderers.

pub mod color;

pub use color::{Color, ParseColorError};

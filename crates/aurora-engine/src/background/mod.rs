//! Procedural wave background.
//!
//! The background is a pure function of normalized surface coordinates and
//! elapsed time. It exists twice:
//! - on the GPU, as the fragment stage of [`BackgroundRenderer`]
//! - on the CPU, as [`generator::shade`], used by tests and [`raster`]
//!
//! Both are driven by the constant table in [`wave`]; the WGSL source is
//! generated from it so the two cannot drift apart.

pub mod generator;
pub mod raster;
pub mod shader;
pub mod wave;

mod renderer;
mod uniforms;

pub use renderer::BackgroundRenderer;
pub use uniforms::BackgroundUniforms;
pub use wave::{FalloffSide, WaveDescriptor, BASE_BOTTOM, BASE_TOP, WAVES};

//! Render surface bookkeeping.
//!
//! CPU-side half of the render surface: logical size, pixel density, the
//! orthographic projection, and the uniforms derived from them. The GPU half
//! (`device::Gpu`) is resized from the same events by the window runtime.
//!
//! Everything here is plain data so resize and lifecycle behavior can be tested
//! without a GPU.

mod manager;
mod projection;
mod state;

pub use manager::{Phase, SurfaceManager};
pub use projection::OrthoProjection;
pub use state::SurfaceState;

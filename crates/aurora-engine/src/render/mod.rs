//! GPU rendering plumbing shared by the background and overlay renderers.
//!
//! Each renderer owns its own GPU resources (pipelines, buffers) and records
//! into a [`RenderTarget`] handed out by `core::FrameCtx::render`.

mod ctx;
pub mod quad;

pub use ctx::{RenderCtx, RenderTarget};

//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single application window, and wires them
//! to the GPU layer and the surface manager.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
pub use winit::window::CursorIcon;

//! GPU device + surface management.
//!
//! Creates the wgpu Instance/Adapter/Device/Queue, configures the surface and
//! hands out per-frame encoders. Nothing here knows about what gets drawn.

mod error;
mod gpu;
mod init;

pub use error::SurfaceErrorAction;
pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;

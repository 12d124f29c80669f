//! Time subsystem.
//!
//! Frame timing decoupled from the windowing loop:
//! - one `FrameClock` per render surface
//! - call `tick()` once per presented frame to obtain `FrameTime`
//! - swap the `TimeSource` for a `ManualSource` to drive frames deterministically

mod frame_clock;
mod source;

pub use frame_clock::{FrameClock, FrameTime};
pub use source::{ManualSource, MonotonicSource, TimeSource};

//! Aurora engine crate.
//!
//! Owns the platform + GPU runtime pieces (window loop, device, surface state,
//! frame clock, input) and the procedural background the menu is drawn over.

pub mod background;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod surface;
pub mod time;
pub mod window;

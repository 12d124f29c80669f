//! Aurora UI: the three-item menu drawn over the animated background.
//!
//! ```rust,ignore
//! aurora_ui::Application::new()
//!     .title("Aurora")
//!     .size(1280.0, 720.0)
//!     .run()?;
//! ```
//!
//! The menu model ([`menu`]) is plain data plus a pure reducer and can be
//! driven without a window; [`event`] turns engine input into menu events and
//! [`overlay`] draws the tiles.

pub mod app;
pub mod event;
pub mod menu;
pub mod overlay;

pub use app::Application;

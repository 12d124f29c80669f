use crate::surface::SurfaceState;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called when the surface becomes active and after every resize or
    /// scale-factor change, before the next frame is drawn.
    fn on_resize(&mut self, surface: SurfaceState) {
        let _ = surface;
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called once after the surface has been released. No frames follow.
    fn on_teardown(&mut self) {}
}

use crate::background::BackgroundUniforms;
use crate::time::{FrameClock, FrameTime, MonotonicSource, TimeSource};

use super::{OrthoProjection, SurfaceState};

/// Lifecycle of a managed surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Constructed; no frames are produced yet.
    Idle,
    /// Producing frames.
    Active,
    /// Torn down; never produces frames again.
    Released,
}

/// Owns surface state, the projection and the time uniform for one view.
///
/// The window runtime calls [`activate`](Self::activate) once the GPU surface
/// exists, [`resize`](Self::resize) synchronously on every resize notification,
/// [`tick`](Self::tick) once per redraw and [`deactivate`](Self::deactivate) on
/// teardown.
#[derive(Debug)]
pub struct SurfaceManager<S: TimeSource = MonotonicSource> {
    state: SurfaceState,
    projection: OrthoProjection,
    clock: FrameClock<S>,
    time: f32,
    phase: Phase,
}

impl SurfaceManager<MonotonicSource> {
    pub fn new() -> Self {
        Self::with_source(MonotonicSource)
    }
}

impl Default for SurfaceManager<MonotonicSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TimeSource> SurfaceManager<S> {
    pub fn with_source(source: S) -> Self {
        let state = SurfaceState::default();
        Self {
            state,
            projection: OrthoProjection::for_surface(&state),
            clock: FrameClock::with_source(source),
            time: 0.0,
            phase: Phase::Idle,
        }
    }

    /// Starts the view at the given logical size. Resets the time uniform.
    pub fn activate(&mut self, width: f32, height: f32, pixel_density: f32) -> SurfaceState {
        self.state = SurfaceState::new(width, height, pixel_density);
        self.projection.update(&self.state);
        self.clock.reset();
        self.time = 0.0;
        self.phase = Phase::Active;

        log::info!(
            "surface activated: {}x{} @ {}x",
            self.state.width,
            self.state.height,
            self.state.pixel_density
        );
        self.state
    }

    /// Applies a new logical size; projection and resolution follow immediately.
    ///
    /// Zero or non-finite extents are clamped to 1.
    pub fn resize(&mut self, width: f32, height: f32) -> SurfaceState {
        let next = self.state.resized(width, height);
        if next != self.state {
            log::debug!(
                "surface resized: {}x{} -> {}x{}",
                self.state.width,
                self.state.height,
                next.width,
                next.height
            );
        }
        self.state = next;
        self.projection.update(&self.state);
        self.state
    }

    /// Applies a new device pixel ratio; the logical size is kept.
    pub fn set_pixel_density(&mut self, pixel_density: f32) -> SurfaceState {
        self.state = SurfaceState::new(self.state.width, self.state.height, pixel_density);
        log::debug!("surface pixel density: {}", self.state.pixel_density);
        self.state
    }

    /// Advances the frame clock and stores the new time uniform.
    ///
    /// Returns `None` unless the surface is active.
    pub fn tick(&mut self) -> Option<FrameTime> {
        if self.phase != Phase::Active {
            return None;
        }
        let ft = self.clock.tick();
        self.time = ft.elapsed;
        Some(ft)
    }

    /// Stops frame production for good.
    pub fn deactivate(&mut self) {
        if self.phase == Phase::Active {
            log::info!("surface released after {:.2}s", self.time);
        }
        self.phase = Phase::Released;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    pub fn projection(&self) -> OrthoProjection {
        self.projection
    }

    /// Current time uniform in seconds.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Current resolution uniform (logical px).
    pub fn resolution(&self) -> [f32; 2] {
        [self.state.width, self.state.height]
    }

    /// Uniform block for the background pass.
    pub fn uniforms(&self) -> BackgroundUniforms {
        BackgroundUniforms::new(self.projection.matrix(), self.resolution(), self.time)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::time::ManualSource;

    fn manager() -> (ManualSource, SurfaceManager<ManualSource>) {
        let source = ManualSource::new();
        (source.clone(), SurfaceManager::with_source(source))
    }

    #[test]
    fn idle_manager_produces_no_frames() {
        let (_src, mut m) = manager();
        assert_eq!(m.phase(), Phase::Idle);
        assert!(m.tick().is_none());
    }

    #[test]
    fn resize_updates_resolution_and_projection() {
        let (_src, mut m) = manager();
        m.activate(800.0, 600.0, 1.0);
        m.resize(1024.0, 768.0);

        assert_eq!(m.resolution(), [1024.0, 768.0]);
        let p = m.projection();
        assert_eq!((p.left, p.right, p.top, p.bottom), (-512.0, 512.0, 384.0, -384.0));

        let u = m.uniforms();
        assert_eq!(u.resolution, [1024.0, 768.0]);
    }

    #[test]
    fn resize_to_zero_clamps_to_one() {
        let (_src, mut m) = manager();
        m.activate(800.0, 600.0, 2.0);
        let s = m.resize(0.0, 0.0);

        assert_eq!((s.width, s.height), (1.0, 1.0));
        assert_eq!(m.resolution(), [1.0, 1.0]);
        assert!(m.projection().matrix().is_finite());
        assert_eq!(s.pixel_density, 2.0);
    }

    #[test]
    fn pixel_density_change_keeps_logical_size() {
        let (_src, mut m) = manager();
        m.activate(800.0, 600.0, 1.0);
        let s = m.set_pixel_density(2.0);
        assert_eq!((s.width, s.height, s.pixel_density), (800.0, 600.0, 2.0));
        assert_eq!(s.physical_size(), (1600, 1200));
        assert_eq!(m.resolution(), [800.0, 600.0]);

        assert_eq!(m.set_pixel_density(0.0).pixel_density, 1.0);
    }

    #[test]
    fn tick_feeds_elapsed_time_into_uniforms() {
        let (src, mut m) = manager();
        m.activate(640.0, 480.0, 1.0);

        src.advance(Duration::from_millis(500));
        m.tick();
        src.advance(Duration::from_millis(500));
        let ft = m.tick().unwrap();

        assert!((ft.elapsed - 1.0).abs() < 1e-6);
        assert!((m.uniforms().time - 1.0).abs() < 1e-6);
    }

    #[test]
    fn activation_resets_time() {
        let (src, mut m) = manager();
        m.activate(640.0, 480.0, 1.0);
        src.advance(Duration::from_secs(4));
        m.tick();
        assert!(m.time() > 3.9);

        m.activate(640.0, 480.0, 1.0);
        assert_eq!(m.time(), 0.0);
        src.advance(Duration::from_millis(250));
        assert!((m.tick().unwrap().elapsed - 0.25).abs() < 1e-6);
    }

    #[test]
    fn deactivate_stops_frames() {
        let (src, mut m) = manager();
        m.activate(640.0, 480.0, 1.0);
        assert!(m.tick().is_some());

        m.deactivate();
        src.advance(Duration::from_millis(16));
        assert_eq!(m.phase(), Phase::Released);
        assert!(m.tick().is_none());
    }
}

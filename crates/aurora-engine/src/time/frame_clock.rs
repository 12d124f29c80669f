use std::time::{Duration, Instant};

use super::source::{MonotonicSource, TimeSource};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds (clamped).
    pub dt: f32,

    /// Wall-clock seconds since the clock was created or last reset (unclamped).
    pub elapsed: f32,

    /// Timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// `dt` is clamped so animation code stays stable after debugger pauses or
/// minimized windows. `elapsed` is not: the background's time uniform must track
/// real time since activation.
#[derive(Debug, Clone)]
pub struct FrameClock<S: TimeSource = MonotonicSource> {
    source: S,
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock<MonotonicSource> {
    /// Creates a wall-clock driven clock with default clamps.
    pub fn new() -> Self {
        Self::with_source(MonotonicSource)
    }
}

impl Default for FrameClock<MonotonicSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TimeSource> FrameClock<S> {
    /// Creates a clock reading time from `source`.
    ///
    /// Default clamps: 100µs minimum (tight loops on some platforms report zero),
    /// 250ms maximum.
    pub fn with_source(source: S) -> Self {
        Self::with_clamps(source, Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(source: S, dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = source.now();
        Self {
            source,
            start: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Restarts elapsed time and the frame counter.
    ///
    /// Called when a surface is (re)activated.
    pub fn reset(&mut self) {
        let now = self.source.now();
        self.start = now;
        self.last = now;
        self.frame_index = 0;
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = self.source.now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: now.saturating_duration_since(self.start).as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

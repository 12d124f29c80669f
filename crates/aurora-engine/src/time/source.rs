use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Supplies "now" to a [`FrameClock`](super::FrameClock).
pub trait TimeSource {
    fn now(&self) -> Instant;
}

/// Wall-clock source backed by `Instant::now()`.
#[derive(Debug, Copy, Clone, Default)]
pub struct MonotonicSource;

impl TimeSource for MonotonicSource {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually stepped source.
///
/// Clones share the same timeline, so a test can keep one handle and hand the
/// other to the clock under test.
#[derive(Debug, Clone)]
pub struct ManualSource {
    now: Rc<Cell<Instant>>,
}

impl ManualSource {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(origin: Instant) -> Self {
        Self {
            now: Rc::new(Cell::new(origin)),
        }
    }

    /// Moves the shared timeline forward by `step`.
    pub fn advance(&self, step: Duration) {
        self.now.set(self.now.get() + step);
    }
}

impl Default for ManualSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for ManualSource {
    #[inline]
    fn now(&self) -> Instant {
        self.now.get()
    }
}

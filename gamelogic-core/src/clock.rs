//! Frame timing.

use std::time::Instant;

/// Timing information for a single frame, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Time since the clock was started.
    pub elapsed: f32,
    /// Time since the previous tick.
    pub delta: f32,
}

/// Measures time since startup and between frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { start, last: start }
    }

    /// Advances the clock to now.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`. An instant earlier than the last tick counts as no time
    /// passing.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let delta = now.saturating_duration_since(self.last).as_secs_f32();
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        self.last = self.last.max(now);
        FrameTime { elapsed, delta }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

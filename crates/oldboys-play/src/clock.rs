use std::time::Instant;

/// Virtual tick counter advanced from wall-clock deltas at a fixed rate.
///
/// The tick is a pure function of the deltas fed in, so a recorded delta
/// sequence replays to the exact same tick values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickClock {
    tick: f64,
    ticks_per_second: f64,
}

impl TickClock {
    pub fn new(ticks_per_second: f64) -> Self {
        Self {
            tick: 0.0,
            ticks_per_second,
        }
    }

    pub fn tick(&self) -> f64 {
        self.tick
    }

    pub fn ticks_per_second(&self) -> f64 {
        self.ticks_per_second
    }

    /// Tick after advancing by `delta_seconds`, without advancing.
    pub fn peek(&self, delta_seconds: f64) -> f64 {
        self.tick + delta_seconds * self.ticks_per_second
    }

    /// Advance by a non-negative wall-clock delta and return the new tick.
    pub fn advance(&mut self, delta_seconds: f64) -> f64 {
        debug_assert!(delta_seconds >= 0.0, "negative frame delta {delta_seconds}");
        self.tick = self.peek(delta_seconds);
        self.tick
    }
}

/// Turns frame timestamps into delta seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameTimer {
    last: Option<Instant>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the last timestamp. The next `delta` returns 0.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Seconds since the previous call, saturating at 0 for out-of-order stamps.
    pub fn delta(&mut self, now: Instant) -> f64 {
        let delta = self
            .last
            .map_or(0.0, |prev| now.saturating_duration_since(prev).as_secs_f64());
        self.last = Some(now);
        delta
    }
}

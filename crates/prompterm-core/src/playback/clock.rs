//! Monotonic time sources for the frame scheduler.

use std::time::{Duration, Instant};

/// A source of monotonically non-decreasing timestamps.
///
/// Timestamps are relative to the source's own origin; only differences
/// between successive reads are meaningful. Each scheduler owns its clock,
/// so engines running side by side (in tests, for instance) never share
/// time state.
pub trait ClockSource {
    fn now(&mut self) -> Duration;
}

/// Wall-clock source backed by `Instant`
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for MonotonicClock {
    fn now(&mut self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually advanced clock for deterministic tests
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, delta: Duration) {
        self.now += delta;
    }
}

impl ClockSource for ManualClock {
    fn now(&mut self) -> Duration {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_clock_advances() {
        let mut clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_manual_clock() {
        let mut clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        clock.advance(Duration::from_millis(16));
        assert_eq!(clock.now(), Duration::from_millis(16));
    }
}

//! Frame scheduling.
//!
//! The scheduler turns a monotonic clock into per-tick frame deltas. It has
//! exactly two states, Stopped and Running; stopping is immediate and no
//! delta is produced afterwards. The previous tick's timestamp is a private
//! field here rather than shared state, so concurrent engines (in tests)
//! never interfere.

use std::time::Duration;

use super::clock::{ClockSource, MonotonicClock};

pub struct FrameScheduler {
    clock: Box<dyn ClockSource>,
    previous: Option<Duration>,
    running: bool,
}

impl FrameScheduler {
    /// Create a stopped scheduler over the given clock
    pub fn new(clock: impl ClockSource + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            previous: None,
            running: false,
        }
    }

    /// Create a stopped scheduler over the wall clock
    pub fn monotonic() -> Self {
        Self::new(MonotonicClock::new())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin producing ticks. The reference timestamp resets, so the first
    /// tick after a start reports a zero delta rather than the stopped gap.
    pub fn start(&mut self) {
        self.running = true;
        self.previous = None;
    }

    /// Stop immediately; `tick()` yields nothing until the next start.
    pub fn stop(&mut self) {
        self.running = false;
        self.previous = None;
    }

    /// Produce the frame delta for one tick, or `None` while stopped.
    pub fn tick(&mut self) -> Option<Duration> {
        if !self.running {
            return None;
        }
        let now = self.clock.now();
        let delta = match self.previous {
            Some(prev) => now.saturating_sub(prev),
            None => Duration::ZERO,
        };
        self.previous = Some(now);
        Some(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::clock::ManualClock;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Clock handle that can be advanced while the scheduler owns it
    #[derive(Clone, Default)]
    struct SharedClock(Rc<RefCell<ManualClock>>);

    impl SharedClock {
        fn advance(&self, delta: Duration) {
            self.0.borrow_mut().advance(delta);
        }
    }

    impl ClockSource for SharedClock {
        fn now(&mut self) -> Duration {
            self.0.borrow_mut().now()
        }
    }

    #[test]
    fn test_stopped_scheduler_produces_no_ticks() {
        let mut scheduler = FrameScheduler::new(ManualClock::new());
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.tick(), None);
    }

    #[test]
    fn test_first_tick_after_start_is_zero() {
        let clock = SharedClock::default();
        let mut scheduler = FrameScheduler::new(clock.clone());
        clock.advance(Duration::from_secs(5));
        scheduler.start();
        assert_eq!(scheduler.tick(), Some(Duration::ZERO));
    }

    #[test]
    fn test_delta_follows_clock() {
        let clock = SharedClock::default();
        let mut scheduler = FrameScheduler::new(clock.clone());
        scheduler.start();
        scheduler.tick();

        clock.advance(Duration::from_millis(16));
        assert_eq!(scheduler.tick(), Some(Duration::from_millis(16)));

        clock.advance(Duration::from_millis(33));
        assert_eq!(scheduler.tick(), Some(Duration::from_millis(33)));
    }

    #[test]
    fn test_stop_is_immediate_and_restart_resets_reference() {
        let clock = SharedClock::default();
        let mut scheduler = FrameScheduler::new(clock.clone());
        scheduler.start();
        scheduler.tick();

        scheduler.stop();
        assert_eq!(scheduler.tick(), None);

        // A long stopped gap must not surface as a giant delta
        clock.advance(Duration::from_secs(60));
        scheduler.start();
        assert_eq!(scheduler.tick(), Some(Duration::ZERO));
    }
}

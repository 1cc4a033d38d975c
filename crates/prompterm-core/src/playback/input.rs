//! Manual scroll input aggregation.
//!
//! User scroll events (mouse wheel notches, scroll keys) arrive between
//! frames and are buffered here, then applied atomically at the start of the
//! next tick. The engine drains the accumulator exactly once per tick; a
//! non-zero drained delta takes precedence over speed-based integration for
//! that tick.

/// Capability consumed by the playback session: produce the delta
/// accumulated since the last tick and clear it.
pub trait ManualInput {
    /// Drain the pending delta. Must clear it in the same call so a manual
    /// delta can never be applied twice.
    fn take_delta(&mut self) -> f64;
}

/// Accumulates wheel/key scroll deltas between ticks.
///
/// Multiple events within one frame are batched into a single delta, the
/// same way rapid wheel notches coalesce in the original scroll handler.
#[derive(Debug, Default)]
pub struct WheelAccumulator {
    pending: f64,
}

impl WheelAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scroll delta (positive = down). Non-finite deltas are dropped.
    pub fn record(&mut self, delta: f64) {
        if delta.is_finite() {
            self.pending += delta;
        }
    }

    /// Pending delta without draining (used to pick the frame cadence)
    pub fn pending(&self) -> f64 {
        self.pending
    }
}

impl ManualInput for WheelAccumulator {
    fn take_delta(&mut self) -> f64 {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_batch_into_one_delta() {
        let mut acc = WheelAccumulator::new();
        acc.record(3.0);
        acc.record(3.0);
        acc.record(-1.0);
        assert_eq!(acc.take_delta(), 5.0);
    }

    #[test]
    fn test_take_clears_exactly_once() {
        let mut acc = WheelAccumulator::new();
        acc.record(7.0);
        assert_eq!(acc.take_delta(), 7.0);
        assert_eq!(acc.take_delta(), 0.0);
    }

    #[test]
    fn test_non_finite_deltas_dropped() {
        let mut acc = WheelAccumulator::new();
        acc.record(f64::NAN);
        acc.record(f64::INFINITY);
        acc.record(2.0);
        assert_eq!(acc.take_delta(), 2.0);
    }
}

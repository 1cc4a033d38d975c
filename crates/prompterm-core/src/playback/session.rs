//! Session wiring for the playback loop.
//!
//! A session owns the four playback parts and runs one tick of the control
//! flow per `advance()` call: frame delta from the scheduler, manual delta
//! drained from the input aggregator, latest height from the bounds tracker,
//! all fed to the engine. Every dependency is read fresh from the owned parts
//! on each call; nothing is captured across ticks.

use crate::config::PlaybackConfig;

use super::bounds::ContentBoundsTracker;
use super::engine::PlaybackEngine;
use super::input::{ManualInput, WheelAccumulator};
use super::scheduler::FrameScheduler;

pub struct PlaybackSession<M: ManualInput = WheelAccumulator> {
    engine: PlaybackEngine,
    scheduler: FrameScheduler,
    input: M,
    bounds: ContentBoundsTracker,
}

impl PlaybackSession<WheelAccumulator> {
    /// Create a session over the wall clock with a started scheduler.
    ///
    /// The scheduler runs for the lifetime of the view; pausing playback only
    /// clears the engine's playing flag so manual scrolling and resize
    /// tracking stay live between ticks.
    pub fn new(config: &PlaybackConfig) -> Self {
        let mut scheduler = FrameScheduler::monotonic();
        scheduler.start();
        Self {
            engine: PlaybackEngine::from_config(config),
            scheduler,
            input: WheelAccumulator::new(),
            bounds: ContentBoundsTracker::new(),
        }
    }
}

impl<M: ManualInput> PlaybackSession<M> {
    /// Assemble a session from explicit parts (tests, custom clocks)
    pub fn from_parts(
        engine: PlaybackEngine,
        scheduler: FrameScheduler,
        input: M,
        bounds: ContentBoundsTracker,
    ) -> Self {
        Self {
            engine,
            scheduler,
            input,
            bounds,
        }
    }

    /// Run one tick. Returns `false` without touching any state when the
    /// scheduler is stopped.
    pub fn advance(&mut self) -> bool {
        let Some(frame_delta) = self.scheduler.tick() else {
            return false;
        };
        let manual_delta = self.input.take_delta();
        self.engine
            .tick(frame_delta, manual_delta, self.bounds.latest());
        true
    }

    pub fn engine(&self) -> &PlaybackEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut PlaybackEngine {
        &mut self.engine
    }

    pub fn input(&self) -> &M {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut M {
        &mut self.input
    }

    pub fn bounds(&self) -> &ContentBoundsTracker {
        &self.bounds
    }

    pub fn scheduler_mut(&mut self) -> &mut FrameScheduler {
        &mut self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::clock::ManualClock;
    use std::time::Duration;

    fn session_with_manual_clock() -> PlaybackSession {
        let mut scheduler = FrameScheduler::new(ManualClock::new());
        scheduler.start();
        PlaybackSession::from_parts(
            PlaybackEngine::new(),
            scheduler,
            WheelAccumulator::new(),
            ContentBoundsTracker::new(),
        )
    }

    #[test]
    fn test_advance_uses_tracked_height() {
        let mut session = session_with_manual_clock();
        session.bounds().report(640.0);
        session.advance();
        assert_eq!(session.engine().content_height(), 640.0);
    }

    #[test]
    fn test_advance_drains_manual_input_once() {
        let mut session = session_with_manual_clock();
        session.bounds().report(640.0);
        session.input_mut().record(12.0);

        session.advance();
        assert_eq!(session.engine().position(), 12.0);

        // A second tick must not re-apply the same delta
        session.advance();
        assert_eq!(session.engine().position(), 12.0);
    }

    #[test]
    fn test_stopped_scheduler_blocks_ticks() {
        let mut session = session_with_manual_clock();
        session.scheduler_mut().stop();
        session.input_mut().record(12.0);

        assert!(!session.advance());
        assert_eq!(session.engine().position(), 0.0);
        // The delta stays buffered for the next running tick
        assert_eq!(session.input().pending(), 12.0);
    }

    #[test]
    fn test_manual_beats_integration_through_session() {
        let mut session = session_with_manual_clock();
        session.bounds().report(640.0);
        session.engine_mut().set_playing(true);
        session.advance();

        session.input_mut().record(4.0);
        session.advance();
        // Manual clock never moves, so any drift would come from the manual
        // delta alone.
        assert_eq!(session.engine().position(), 4.0);
    }
}

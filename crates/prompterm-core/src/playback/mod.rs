//! Playback synchronization engine.
//!
//! The teleprompter's one piece of real temporal logic: a per-frame position
//! integrator with manual-scroll override, bounds clamping and auto-pause at
//! the end of content.
//!
//! # Architecture
//!
//! - `clock` - monotonic time sources (trait + wall clock + manual test clock)
//! - `scheduler` - turns the clock into per-tick frame deltas, start/stop
//! - `input` - buffers manual scroll deltas between ticks
//! - `bounds` - deduplicated content-height reports with subscriptions
//! - `engine` - the state machine over {position, height, speed, playing}
//! - `session` - owns all of the above and runs one tick per `advance()`
//! - `timecode` - `M:SS` formatting for the transport display
//!
//! # Usage
//!
//! ```ignore
//! use prompterm_core::playback::PlaybackSession;
//!
//! let mut session = PlaybackSession::new(&config.playback);
//! session.bounds().report(measured_rows);
//! session.engine_mut().set_playing(true);
//!
//! // In the main loop, once per frame:
//! session.input_mut().record(wheel_delta);
//! session.advance();
//! let state = session.engine().state();
//! ```

pub mod bounds;
pub mod clock;
pub mod engine;
pub mod input;
pub mod scheduler;
pub mod session;
pub mod timecode;

pub use bounds::{BoundsSubscription, ContentBoundsTracker};
pub use clock::{ClockSource, ManualClock, MonotonicClock};
pub use engine::{PlaybackEngine, PlaybackState};
pub use input::{ManualInput, WheelAccumulator};
pub use scheduler::FrameScheduler;
pub use session::PlaybackSession;
pub use timecode::display_time;

//! Property-based invariant tests for the playback engine.
//!
//! These tests verify that the engine upholds its guarantees under arbitrary
//! tick sequences:
//!
//! 1. After every tick, 0 <= position <= content_height.
//! 2. Once auto-paused at the end, playback never resumes on its own.
//! 3. seek(p) round-trips through progress() for any p in [0, 1].
//! 4. display_time always renders floor-based M:SS with two-digit seconds.

use std::time::Duration;

use prompterm_core::playback::{display_time, PlaybackEngine};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum TickInput {
    Auto { delta_ms: u64 },
    Manual { delta: f64 },
    Height { rows: f64 },
    Seek { progress: f64 },
    Play(bool),
}

fn tick_input() -> impl Strategy<Value = TickInput> {
    prop_oneof![
        (0u64..2_000).prop_map(|delta_ms| TickInput::Auto { delta_ms }),
        (-500.0f64..500.0).prop_map(|delta| TickInput::Manual { delta }),
        (0.0f64..5_000.0).prop_map(|rows| TickInput::Height { rows }),
        (-0.5f64..1.5).prop_map(|progress| TickInput::Seek { progress }),
        any::<bool>().prop_map(TickInput::Play),
    ]
}

fn apply(engine: &mut PlaybackEngine, input: &TickInput) {
    match *input {
        TickInput::Auto { delta_ms } => {
            engine.tick(Duration::from_millis(delta_ms), 0.0, None);
        }
        TickInput::Manual { delta } => {
            engine.tick(Duration::from_millis(16), delta, None);
        }
        TickInput::Height { rows } => {
            engine.tick(Duration::from_millis(16), 0.0, Some(rows));
        }
        TickInput::Seek { progress } => engine.seek(progress),
        TickInput::Play(playing) => engine.set_playing(playing),
    }
}

proptest! {
    #[test]
    fn position_stays_clamped(inputs in proptest::collection::vec(tick_input(), 0..200)) {
        let mut engine = PlaybackEngine::new();
        for input in &inputs {
            apply(&mut engine, input);
            let state = engine.state();
            prop_assert!(state.position >= 0.0);
            prop_assert!(state.position <= state.content_height);
            prop_assert!(state.position.is_finite());
        }
    }

    #[test]
    fn auto_pause_never_resumes_without_set_playing(
        height in 1.0f64..2_000.0,
        idle_ticks in 1usize..50,
    ) {
        let mut engine = PlaybackEngine::new();
        engine.tick(Duration::ZERO, 0.0, Some(height));
        engine.seek(1.0);
        engine.set_playing(true);
        engine.tick(Duration::from_millis(16), 0.0, None);
        prop_assert!(!engine.playing());

        for _ in 0..idle_ticks {
            engine.tick(Duration::from_millis(16), 0.0, None);
            prop_assert!(!engine.playing());
            prop_assert_eq!(engine.position(), height);
        }
    }

    #[test]
    fn seek_round_trips(height in 1.0f64..10_000.0, progress in 0.0f64..=1.0) {
        let mut engine = PlaybackEngine::new();
        engine.tick(Duration::ZERO, 0.0, Some(height));
        engine.seek(progress);
        prop_assert!((engine.progress() - progress).abs() < 1e-9);
    }

    #[test]
    fn display_time_shape(seconds in 0.0f64..36_000.0) {
        let rendered = display_time(seconds);
        let (minutes, secs) = rendered.split_once(':').expect("has a colon");
        prop_assert_eq!(secs.len(), 2);
        let minutes: u64 = minutes.parse().expect("minutes are numeric");
        let secs: u64 = secs.parse().expect("seconds are numeric");
        prop_assert!(secs < 60);
        prop_assert_eq!(minutes * 60 + secs, seconds.floor() as u64);
    }
}

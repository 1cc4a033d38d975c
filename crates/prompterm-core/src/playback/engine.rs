//! Playback state integration.
//!
//! One engine owns the whole transport state and evolves it once per frame.
//! Each tick reconciles three inputs: the frame delta from the scheduler, the
//! manual scroll delta drained from the input aggregator, and the latest
//! measured content height. Manual input wins over speed integration for the
//! tick it arrives in; the position is clamped to the content bounds at the
//! end of every tick; reaching the end while playing pauses playback exactly
//! once.

use std::time::Duration;

use tracing::debug;

use crate::config::PlaybackConfig;

/// Observable transport state, published after every tick.
///
/// `position` and `content_height` are terminal rows; `speed` is rows per
/// second. `0 <= position <= content_height` holds at the end of every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub position: f64,
    pub content_height: f64,
    pub speed: f64,
    pub playing: bool,
    pub font_size: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            position: 0.0,
            content_height: 1080.0,
            speed: 20.0,
            playing: false,
            font_size: 36.0,
        }
    }
}

pub struct PlaybackEngine {
    state: PlaybackState,
    min_speed: f64,
    min_font_size: f64,
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::from_config(&PlaybackConfig::default())
    }
}

impl PlaybackEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with configured speed, font size and control floors
    pub fn from_config(config: &PlaybackConfig) -> Self {
        let mut state = PlaybackState::default();
        if config.speed.is_finite() && config.speed > 0.0 {
            state.speed = config.speed;
        }
        if config.font_size.is_finite() && config.font_size > 0.0 {
            state.font_size = config.font_size;
        }
        Self {
            state,
            min_speed: config.min_speed,
            min_font_size: config.min_font_size,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn position(&self) -> f64 {
        self.state.position
    }

    pub fn content_height(&self) -> f64 {
        self.state.content_height
    }

    pub fn speed(&self) -> f64 {
        self.state.speed
    }

    pub fn playing(&self) -> bool {
        self.state.playing
    }

    pub fn font_size(&self) -> f64 {
        self.state.font_size
    }

    /// Advance the state by one frame.
    ///
    /// A non-zero `manual_delta` overrides speed integration for this tick;
    /// the two never combine. `content_height` of `None` (or a non-finite
    /// report) means no bounds update this tick and the previous height is
    /// kept. The auto-pause check runs on the pre-clamp position, so an
    /// overshooting frame both pauses and lands exactly on the end.
    pub fn tick(&mut self, frame_delta: Duration, manual_delta: f64, content_height: Option<f64>) {
        if manual_delta != 0.0 && manual_delta.is_finite() {
            self.state.position += manual_delta;
        } else if self.state.playing {
            self.state.position += self.state.speed * frame_delta.as_secs_f64();
        }

        if let Some(height) = content_height {
            if height.is_finite() && height >= 0.0 {
                self.state.content_height = height;
            }
        }

        if self.state.position >= self.state.content_height && self.state.playing {
            debug!(position = self.state.position, "reached end of content, pausing");
            self.state.playing = false;
        }

        self.state.position = self.state.position.clamp(0.0, self.state.content_height);
    }

    /// Seek to a fractional progress in `[0, 1]` of the content height
    pub fn seek(&mut self, progress: f64) {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.state.position = progress * self.state.content_height;
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.state.playing = playing;
    }

    pub fn toggle_playing(&mut self) {
        self.state.playing = !self.state.playing;
    }

    /// Nudge the speed by a user delta, bounded below by the configured floor
    pub fn adjust_speed(&mut self, delta: f64) {
        if delta.is_finite() {
            self.state.speed = (self.state.speed + delta).max(self.min_speed);
        }
    }

    /// Nudge the font size by a user delta, bounded below by the configured floor
    pub fn adjust_font_size(&mut self, delta: f64) {
        if delta.is_finite() {
            self.state.font_size = (self.state.font_size + delta).max(self.min_font_size);
        }
    }

    /// Fractional progress through the content, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.state.content_height > 0.0 {
            self.state.position / self.state.content_height
        } else {
            0.0
        }
    }

    /// Seconds of content already scrolled past at the current speed
    pub fn elapsed_seconds(&self) -> f64 {
        if self.state.speed > 0.0 {
            self.state.position / self.state.speed
        } else {
            0.0
        }
    }

    /// Total running time of the content at the current speed
    pub fn total_seconds(&self) -> f64 {
        if self.state.speed > 0.0 {
            self.state.content_height / self.state.speed
        } else {
            0.0
        }
    }
}

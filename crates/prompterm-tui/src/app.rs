use std::sync::Arc;

use tracing::{debug, info};

use prompterm_core::playback::BoundsSubscription;
use prompterm_core::{AppConfig, PlaybackSession, Script};

use crate::layout::ScriptLayout;
use crate::theme::Theme;

/// Rows reserved for the transport bar at the bottom of the screen
pub const TRANSPORT_ROWS: u16 = 2;

/// Columns reserved on the left of the prompter for the cue marker
pub const GUTTER_COLS: u16 = 2;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal prompting mode
    Normal,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Playback session (engine, scheduler, manual input, bounds tracker)
    pub session: PlaybackSession,
    /// The loaded script
    pub script: Script,
    /// Cached wrapped layout for the current script
    pub layout: ScriptLayout,
    /// Color theme
    pub theme: Theme,
    /// Current application mode
    pub mode: Mode,
    /// True while the script is open in the external editor; read by the
    /// dim-overlay rendering only, never by the playback engine
    pub editing: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    /// An external-editor session was requested and needs the terminal
    pub pending_edit: bool,
    /// Status message shown in the transport bar
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Terminal height from the last prepared frame
    pub viewport_rows: u16,
    /// Keeps the height-change log subscription registered
    _height_watch: BoundsSubscription,
}

impl App {
    pub fn new(config: Arc<AppConfig>, script: Script) -> Self {
        let session = PlaybackSession::new(&config.playback);
        let height_watch = session
            .bounds()
            .subscribe(|rows| debug!(rows, "content height changed"));

        Self {
            config,
            session,
            script,
            layout: ScriptLayout::new(),
            theme: Theme::default(),
            mode: Mode::Normal,
            editing: false,
            should_quit: false,
            pending_edit: false,
            status_message: None,
            pending_key: None,
            viewport_rows: 0,
            _height_watch: height_watch,
        }
    }

    /// Re-measure the script for the current terminal size, publish the
    /// height, and run one playback tick. Called once per frame, before
    /// drawing.
    pub fn prepare_frame(&mut self, width: u16, height: u16) {
        self.viewport_rows = height;
        let text_width = self.text_width(width);
        self.layout
            .ensure(&self.script, text_width, self.session.engine().font_size());
        self.session.bounds().report(self.layout.content_rows() as f64);
        self.session.advance();
    }

    /// Prompter column width for a given terminal width
    pub fn text_width(&self, terminal_width: u16) -> u16 {
        let available = terminal_width.saturating_sub(GUTTER_COLS).max(1);
        let max = self.config.ui.max_text_width;
        if max > 0 {
            available.min(max)
        } else {
            available
        }
    }

    /// Rows in half the prompter viewport, for page scrolling
    pub fn half_page_rows(&self) -> f64 {
        (self.viewport_rows.saturating_sub(TRANSPORT_ROWS) / 2).max(1) as f64
    }

    pub fn toggle_play(&mut self) {
        self.session.engine_mut().toggle_playing();
    }

    /// Buffer a manual scroll delta for the next tick
    pub fn scroll_by(&mut self, rows: f64) {
        self.session.input_mut().record(rows);
    }

    pub fn seek(&mut self, progress: f64) {
        self.session.engine_mut().seek(progress);
    }

    pub fn adjust_speed(&mut self, delta: f64) {
        self.session.engine_mut().adjust_speed(delta);
        let speed = self.session.engine().speed();
        self.set_status(format!("Speed: {:.0} rows/s", speed));
    }

    pub fn adjust_font_size(&mut self, delta: f64) {
        self.session.engine_mut().adjust_font_size(delta);
        let font_size = self.session.engine().font_size();
        self.set_status(format!("Font size: {:.0}", font_size));
    }

    /// Re-read the script from disk and report the outcome
    pub fn reload_script(&mut self) {
        match self.script.reload() {
            Ok(true) => {
                info!(path = ?self.script.source(), "script reloaded");
                self.set_status("Script reloaded");
            }
            Ok(false) => {
                if self.script.source().is_some() {
                    self.set_status("Script unchanged");
                } else {
                    self.set_status("No script file to reload");
                }
            }
            Err(e) => self.set_status(format!("Reload failed: {}", e)),
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}

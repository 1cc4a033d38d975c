use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            playback: PlaybackConfig::default(),
            ui: UiConfig::default(),
            keymap: KeymapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Scroll speed in rows per second
    #[serde(default = "default_speed")]
    pub speed: f64,
    /// Font size (maps to line spacing on the terminal grid)
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// Lowest speed the +/- controls can reach
    #[serde(default = "default_min_speed")]
    pub min_speed: f64,
    /// Lowest font size the +/- controls can reach
    #[serde(default = "default_min_font_size")]
    pub min_font_size: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            font_size: default_font_size(),
            min_speed: default_min_speed(),
            min_font_size: default_min_font_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds (event poll timeout while paused)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while playing or while manual scroll input is pending
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Dim the rows outside the focus band around the cue line
    #[serde(default = "default_true")]
    pub dim_overlay: bool,
    /// Maximum text column width (0 = use the full terminal width)
    #[serde(default)]
    pub max_text_width: u16,
    /// Rows added to the manual delta per mouse wheel notch
    #[serde(default = "default_wheel_step")]
    pub wheel_step_rows: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            dim_overlay: default_true(),
            max_text_width: 0,
            wheel_step_rows: default_wheel_step(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-d>" (Ctrl+d), "<Space>", "<CR>" (Enter), "gg"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Toggle play/pause
    #[serde(default = "default_key_toggle_play")]
    pub toggle_play: String,

    // Manual scrolling
    /// Scroll down one row
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    /// Scroll up one row
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    /// Scroll half page down
    #[serde(default = "default_key_page_down")]
    pub page_down: String,
    /// Scroll half page up
    #[serde(default = "default_key_page_up")]
    pub page_up: String,

    // Seeking
    /// Jump to the top of the script
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    /// Jump to the end of the script
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,

    // Transport adjustments
    /// Increase scroll speed
    #[serde(default = "default_key_speed_up")]
    pub speed_up: String,
    /// Decrease scroll speed
    #[serde(default = "default_key_speed_down")]
    pub speed_down: String,
    /// Increase font size
    #[serde(default = "default_key_font_up")]
    pub font_up: String,
    /// Decrease font size
    #[serde(default = "default_key_font_down")]
    pub font_down: String,

    // Script
    /// Open the script in $EDITOR
    #[serde(default = "default_key_edit")]
    pub edit: String,
    /// Reload the script from disk
    #[serde(default = "default_key_reload")]
    pub reload: String,

    /// Show the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            toggle_play: default_key_toggle_play(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            page_down: default_key_page_down(),
            page_up: default_key_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            speed_up: default_key_speed_up(),
            speed_down: default_key_speed_down(),
            font_up: default_key_font_up(),
            font_down: default_key_font_down(),
            edit: default_key_edit(),
            reload: default_key_reload(),
            help: default_key_help(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_toggle_play() -> String { "<Space>".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_page_down() -> String { "<C-d>".to_string() }
fn default_key_page_up() -> String { "<C-u>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_speed_up() -> String { "=".to_string() }
fn default_key_speed_down() -> String { "-".to_string() }
fn default_key_font_up() -> String { "F".to_string() }
fn default_key_font_down() -> String { "f".to_string() }
fn default_key_edit() -> String { "e".to_string() }
fn default_key_reload() -> String { "r".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("prompterm")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_speed() -> f64 {
    20.0
}

fn default_font_size() -> f64 {
    36.0
}

fn default_min_speed() -> f64 {
    1.0
}

fn default_min_font_size() -> f64 {
    8.0
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_wheel_step() -> f64 {
    3.0
}

fn default_true() -> bool {
    true
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/prompterm/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("prompterm")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("prompterm.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.playback.speed, 20.0);
        assert_eq!(config.playback.font_size, 36.0);
        assert_eq!(config.playback.min_speed, 1.0);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.animation_fps, 60);
        assert!(config.ui.dim_overlay);
        assert_eq!(config.keymap.toggle_play, "<Space>");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&content).unwrap();
        assert_eq!(parsed.playback.speed, config.playback.speed);
        assert_eq!(parsed.keymap.quit, config.keymap.quit);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: AppConfig = toml::from_str("[playback]\nspeed = 35.0\n").unwrap();
        assert_eq!(parsed.playback.speed, 35.0);
        assert_eq!(parsed.playback.font_size, 36.0);
        assert_eq!(parsed.ui.tick_rate_ms, 100);
    }
}

pub mod config;
pub mod error;
pub mod playback;
pub mod script;

pub use config::{AppConfig, KeymapConfig, PlaybackConfig, UiConfig};
pub use error::{Error, Result};
pub use playback::{display_time, PlaybackEngine, PlaybackSession, PlaybackState};
pub use script::Script;

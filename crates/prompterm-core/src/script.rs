use std::path::{Path, PathBuf};

use crate::Result;

const SAMPLE_TEXT: &str = "\
Welcome to prompterm.

This is the built-in sample script. Press Space to start scrolling, and use \
the mouse wheel or j/k to nudge the position by hand at any time. Manual \
scrolling always wins over the automatic speed for that frame, so you can \
correct your place without pausing.

Adjust the scroll speed with = and -, and the font size with F and f. A \
larger font spreads the lines further apart, which also stretches the total \
running time shown in the transport bar.

Seek with the digit keys: 5 jumps to the halfway point, 0 back to the top. \
When the last line reaches the cue row, playback pauses by itself.

Load your own script with: prompterm path/to/script.txt";

/// A loaded teleprompter script.
///
/// Holds the raw text and, when loaded from disk, the source path so the
/// script can be edited externally and reloaded. The revision counter bumps
/// on every content change so cached layouts know when to recompute.
#[derive(Debug, Clone)]
pub struct Script {
    text: String,
    source: Option<PathBuf>,
    revision: u64,
}

impl Script {
    /// Load a script from a file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Ok(Self {
            text,
            source: Some(path.to_path_buf()),
            revision: 0,
        })
    }

    /// Create a script from in-memory text (no backing file)
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: None,
            revision: 0,
        }
    }

    /// The built-in demo script used when no path is given
    pub fn sample() -> Self {
        Self::from_text(SAMPLE_TEXT)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Revision counter for layout-cache invalidation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Re-read the script from its source file.
    ///
    /// Returns `Ok(true)` if the content changed, `Ok(false)` if it is
    /// unchanged or the script has no backing file.
    pub fn reload(&mut self) -> Result<bool> {
        let Some(path) = self.source.clone() else {
            return Ok(false);
        };
        let text = std::fs::read_to_string(&path)?;
        if text == self.text {
            return Ok(false);
        }
        self.text = text;
        self.revision += 1;
        Ok(true)
    }
}

//! Script layout measurement.
//!
//! Wraps the script to the prompter column width and converts font size into
//! line spacing on the terminal grid. The resulting row count is the content
//! height the playback engine scrolls against, so font changes, script edits
//! and terminal resizes all flow into the bounds tracker through a re-measure
//! here.

use prompterm_core::Script;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Font size equal to this many points occupies one terminal row per line;
/// the default 36 gives double-spaced lines.
const FONT_ROW_DIVISOR: f64 = 18.0;

/// Terminal rows occupied by one wrapped line at the given font size
pub fn rows_per_line(font_size: f64) -> u16 {
    if !font_size.is_finite() {
        return 1;
    }
    ((font_size / FONT_ROW_DIVISOR).round() as i64).max(1).min(u16::MAX as i64) as u16
}

/// Greedy word wrap honoring unicode display width. Blank input lines are
/// preserved as paragraph breaks; words wider than the column are broken at
/// cell boundaries.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();

    for raw in text.lines() {
        if raw.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0usize;

        for word in raw.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);
            let sep = if current_width == 0 { 0 } else { 1 };

            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for ch in word.chars() {
                    let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                    if current_width + ch_width > width && current_width > 0 {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
            }
        }

        if current_width > 0 {
            lines.push(current);
        }
    }

    lines
}

/// Cached wrapped layout for the current script.
///
/// `ensure` recomputes the wrap only when the column width or script revision
/// changed; line spacing is cheap and tracks the font size every call.
pub struct ScriptLayout {
    lines: Vec<String>,
    width: u16,
    revision: u64,
    rows_per_line: u16,
    initialized: bool,
}

impl Default for ScriptLayout {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            width: 0,
            revision: 0,
            rows_per_line: 1,
            initialized: false,
        }
    }
}

impl ScriptLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the cached layout up to date. Returns true when the wrap was
    /// recomputed.
    pub fn ensure(&mut self, script: &Script, width: u16, font_size: f64) -> bool {
        self.rows_per_line = rows_per_line(font_size);

        let stale =
            !self.initialized || self.width != width || self.revision != script.revision();
        if !stale {
            return false;
        }

        self.lines = wrap_text(script.text(), width);
        self.width = width;
        self.revision = script.revision();
        self.initialized = true;
        true
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn rows_per_line(&self) -> u16 {
        self.rows_per_line
    }

    /// Total scrollable height in terminal rows
    pub fn content_rows(&self) -> usize {
        self.lines.len() * self.rows_per_line as usize
    }

    /// The wrapped line rendered at a content row, or `None` when the row is
    /// line spacing.
    pub fn line_at_row(&self, row: usize) -> Option<&str> {
        let spacing = self.rows_per_line as usize;
        if row % spacing != 0 {
            return None;
        }
        self.lines.get(row / spacing).map(String::as_str)
    }
}

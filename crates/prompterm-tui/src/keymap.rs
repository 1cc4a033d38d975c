use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use prompterm_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Runtime keymap for efficient key-to-action lookup
pub struct Keymap {
    /// Primary key bindings
    bindings: HashMap<KeyBinding, Action>,
    /// Action for the "gg" double-press sequence, if configured
    pending_g_action: Option<Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();
        let mut pending_g_action = None;

        // Helper to add binding with conflict detection
        let mut add_binding = |key_str: &str, action: Action| {
            // Handle special "gg" sequence
            if key_str == "gg" {
                pending_g_action = Some(action);
                return;
            }

            if let Some(binding) = parse_key_binding(key_str) {
                if let Some(existing) = bindings.get(&binding) {
                    warn!(
                        "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                        key_str, existing, action
                    );
                } else {
                    bindings.insert(binding, action);
                }
            } else {
                warn!("Invalid key binding: '{}', using default", key_str);
            }
        };

        // Add all configured bindings
        add_binding(&config.quit, Action::Quit);
        add_binding(&config.toggle_play, Action::TogglePlay);
        add_binding(&config.scroll_down, Action::ScrollDown);
        add_binding(&config.scroll_up, Action::ScrollUp);
        add_binding(&config.page_down, Action::PageDown);
        add_binding(&config.page_up, Action::PageUp);
        add_binding(&config.jump_to_top, Action::JumpToTop);
        add_binding(&config.jump_to_bottom, Action::JumpToBottom);
        add_binding(&config.speed_up, Action::SpeedUp);
        add_binding(&config.speed_down, Action::SpeedDown);
        add_binding(&config.font_up, Action::FontSizeUp);
        add_binding(&config.font_down, Action::FontSizeDown);
        add_binding(&config.edit, Action::Edit);
        add_binding(&config.reload, Action::Reload);
        add_binding(&config.help, Action::Help);

        // Hardcoded bindings that shouldn't be configurable
        // Ctrl+C always quits
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        // Arrow and page keys as always-available alternatives
        bindings
            .entry(KeyBinding::simple(KeyCode::Down))
            .or_insert(Action::ScrollDown);
        bindings
            .entry(KeyBinding::simple(KeyCode::Up))
            .or_insert(Action::ScrollUp);
        bindings
            .entry(KeyBinding::simple(KeyCode::PageDown))
            .or_insert(Action::PageDown);
        bindings
            .entry(KeyBinding::simple(KeyCode::PageUp))
            .or_insert(Action::PageUp);
        bindings
            .entry(KeyBinding::simple(KeyCode::Home))
            .or_insert(Action::JumpToTop);
        bindings
            .entry(KeyBinding::simple(KeyCode::End))
            .or_insert(Action::JumpToBottom);
        // Escape closes overlays
        bindings.insert(KeyBinding::simple(KeyCode::Esc), Action::ExitMode);

        Self {
            bindings,
            pending_g_action,
        }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    /// Get the action for a completed "gg" sequence
    pub fn pending_g_action(&self) -> Option<&Action> {
        self.pending_g_action.as_ref()
    }

    /// Check if a single 'g' press should start a pending sequence
    pub fn is_g_prefix(&self, binding: &KeyBinding) -> bool {
        self.pending_g_action.is_some()
            && binding.code == KeyCode::Char('g')
            && binding.modifiers == KeyModifiers::NONE
    }
}

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "j", "k", "=", "-", etc.
/// - Uppercase (Shift): "G", "F", etc.
/// - Ctrl: "<C-d>", "<C-u>", etc.
/// - Shift: "<S-g>", etc.
/// - Special keys: "<CR>", "<Esc>", "<Tab>", "<Space>", "<Left>", "<Right>",
///   "<Up>", "<Down>", "<Home>", "<End>", "<PgUp>", "<PgDn>"
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    // Handle special notation <...>
    if s.starts_with('<') && s.ends_with('>') {
        let inner = &s[1..s.len() - 1];
        return parse_special_key(inner);
    }

    // Single character
    if s.len() == 1 {
        let c = s.chars().next()?;
        // Uppercase letters are Shift+letter
        if c.is_ascii_uppercase() {
            return Some(KeyBinding::shift(KeyCode::Char(c)));
        }
        return Some(KeyBinding::simple(KeyCode::Char(c)));
    }

    // "gg" is handled specially by Keymap, not here
    if s == "gg" {
        return Some(KeyBinding::simple(KeyCode::Char('g')));
    }

    None
}

/// Parse special key notation (content inside <...>)
fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::ctrl(key));
    }

    if let Some(rest) = inner.strip_prefix("S-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::shift(key));
    }

    parse_key_name(inner).map(KeyBinding::simple)
}

/// Parse a key name (without modifiers)
fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        _ => {
            // Single character after modifier (e.g., "d" in "<C-d>")
            if name.len() == 1 {
                let c = name.chars().next()?;
                Some(KeyCode::Char(c.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}

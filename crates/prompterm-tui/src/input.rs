use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    TogglePlay,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    /// Seek to a fractional progress (digit keys: '3' -> 30%)
    Seek(f64),
    SpeedUp,
    SpeedDown,
    FontSizeUp,
    FontSizeDown,
    Edit,
    Reload,
    Help,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Any key closes the help overlay
    if app.mode == Mode::Help {
        return Action::ExitMode;
    }

    let binding = KeyBinding::new(key.code, key.modifiers);

    // 'gg' requires a double press
    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap.pending_g_action().cloned().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    // Digit keys seek to tenths of the script ('0' = top, '5' = halfway)
    if let (KeyCode::Char(c), KeyModifiers::NONE) = (key.code, key.modifiers) {
        if let Some(digit) = c.to_digit(10) {
            return Action::Seek(digit as f64 / 10.0);
        }
    }

    keymap.get(&binding).cloned().unwrap_or(Action::None)
}

/// Translate a mouse event into a manual scroll delta in rows, if any
pub fn handle_mouse_event(mouse: MouseEvent, wheel_step_rows: f64) -> Option<f64> {
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(wheel_step_rows),
        MouseEventKind::ScrollUp => Some(-wheel_step_rows),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, MouseButton};
    use prompterm_core::{AppConfig, Script};
    use std::sync::Arc;

    fn test_app() -> App {
        App::new(Arc::new(AppConfig::default()), Script::sample())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_digit_seeks() {
        let app = test_app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('5')), &app, &keymap),
            Action::Seek(0.5)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('0')), &app, &keymap),
            Action::Seek(0.0)
        );
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = test_app();
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app, &keymap),
            Action::PendingG
        );
        app.pending_key = Some('g');
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app, &keymap),
            Action::JumpToTop
        );
    }

    #[test]
    fn test_any_key_closes_help() {
        let mut app = test_app();
        app.mode = Mode::Help;
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &app, &keymap),
            Action::ExitMode
        );
    }

    #[test]
    fn test_mouse_wheel_deltas() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollDown), 3.0),
            Some(3.0)
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollUp), 3.0),
            Some(-3.0)
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left)), 3.0),
            None
        );
    }
}

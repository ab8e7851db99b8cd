//! Terminal event filtering.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event changed what is on screen.
    Redraw,
}

/// Key event predicates shared by the event loop.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is the quit chord that works regardless of keybindings.
    #[must_use]
    pub fn is_force_quit(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if key should be handled; releases are ignored.
    #[must_use]
    pub fn is_actionable(key: &KeyEvent) -> bool {
        matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, kind)
    }

    #[test]
    fn test_force_quit() {
        assert!(EventHandler::is_force_quit(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press
        )));
        assert!(!EventHandler::is_force_quit(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::NONE,
            KeyEventKind::Press
        )));
        assert!(!EventHandler::is_force_quit(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Press
        )));
    }

    #[test]
    fn test_release_is_not_actionable() {
        assert!(EventHandler::is_actionable(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Press
        )));
        assert!(EventHandler::is_actionable(&make_key_event(
            KeyCode::Down,
            KeyModifiers::NONE,
            KeyEventKind::Repeat
        )));
        assert!(!EventHandler::is_actionable(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release
        )));
    }
}

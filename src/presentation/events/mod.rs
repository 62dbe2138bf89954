//! Event handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Terminal event classification helpers.
pub struct EventHandler;

impl EventHandler {
    /// Extracts a key press from a terminal event.
    ///
    /// Release and repeat events are dropped so each key acts once on
    /// terminals that report them.
    #[must_use]
    pub fn key_press(event: &Event) -> Option<KeyEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
            _ => None,
        }
    }

    /// Checks if key is a forced quit event, honoured even inside dialogs.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if the event should trigger a redraw without other handling.
    #[must_use]
    pub fn is_resize_event(event: &Event) -> bool {
        matches!(event, Event::Resize(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_quit_events() {
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
    }

    #[test]
    fn test_non_quit_events() {
        assert!(!EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_quit_event(&make_key_event(
            KeyCode::Esc,
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('d'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(EventHandler::key_press(&Event::Key(release)), None);

        let press = make_key_event(KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(EventHandler::key_press(&Event::Key(press)), Some(press));
    }

    #[test]
    fn test_resize_event() {
        assert!(EventHandler::is_resize_event(&Event::Resize(80, 24)));
        assert!(!EventHandler::is_resize_event(&Event::FocusGained));
    }
}

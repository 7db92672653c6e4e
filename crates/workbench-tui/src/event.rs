//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use workbench_app::message::Message;
use workbench_app::InputKey;
use workbench_core::prelude::*;

/// Frame interval; a poll that times out produces a [`Message::Tick`]
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char(c) if ctrl => Some(InputKey::CharCtrl(c.to_ascii_lowercase())),
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None,
    }
}

/// Translate one terminal event into a message
fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    if event::poll(POLL_INTERVAL)? {
        let event = event::read()?;
        Ok(event_to_message(event))
    } else {
        // Tick on timeout drives the pending-reply spinner
        Ok(Some(Message::Tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_char_conversion() {
        assert_eq!(
            key_event_to_input(key(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(InputKey::Char('a'))
        );
        assert_eq!(
            key_event_to_input(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(InputKey::Char('A'))
        );
    }

    #[test]
    fn test_ctrl_chords_are_lowercased() {
        assert_eq!(
            key_event_to_input(key(KeyCode::Char('p'), KeyModifiers::CONTROL)),
            Some(InputKey::CharCtrl('p'))
        );
        assert_eq!(
            key_event_to_input(key(
                KeyCode::Char('B'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT
            )),
            Some(InputKey::CharCtrl('b'))
        );
    }

    #[test]
    fn test_navigation_and_editing_keys() {
        let cases = [
            (KeyCode::Up, InputKey::Up),
            (KeyCode::Down, InputKey::Down),
            (KeyCode::Left, InputKey::Left),
            (KeyCode::Right, InputKey::Right),
            (KeyCode::Home, InputKey::Home),
            (KeyCode::End, InputKey::End),
            (KeyCode::PageUp, InputKey::PageUp),
            (KeyCode::PageDown, InputKey::PageDown),
            (KeyCode::Enter, InputKey::Enter),
            (KeyCode::Esc, InputKey::Esc),
            (KeyCode::Backspace, InputKey::Backspace),
            (KeyCode::Delete, InputKey::Delete),
            (KeyCode::F(5), InputKey::F(5)),
        ];
        for (code, expected) in cases {
            assert_eq!(
                key_event_to_input(key(code, KeyModifiers::NONE)),
                Some(expected),
                "{:?}",
                code
            );
        }
    }

    #[test]
    fn test_backtab_with_shift() {
        assert_eq!(
            key_event_to_input(key(KeyCode::Tab, KeyModifiers::SHIFT)),
            Some(InputKey::BackTab)
        );
        assert_eq!(
            key_event_to_input(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(InputKey::BackTab)
        );
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        assert_eq!(
            key_event_to_input(key(KeyCode::Insert, KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            key_event_to_input(key(KeyCode::CapsLock, KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_key_release_is_not_a_message() {
        let release = KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(event_to_message(Event::Key(release)).is_none());

        let press = key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(matches!(
            event_to_message(Event::Key(press)),
            Some(Message::Key(InputKey::Char('x')))
        ));
    }

    #[test]
    fn test_resize_and_focus_events_ignored() {
        assert!(event_to_message(Event::Resize(100, 40)).is_none());
        assert!(event_to_message(Event::FocusGained).is_none());
    }
}

//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! that workbench-app stays free of terminal types and the headless runner
//! can drive the same handlers.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character (letters, digits, symbols, space)
    Char(char),
    /// Character pressed together with Ctrl
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// The character this key would insert into a text field, if any
    pub fn as_text(&self) -> Option<char> {
        match self {
            InputKey::Char(c) if !c.is_control() => Some(*c),
            _ => None,
        }
    }

    /// Whether the key moves a cursor or viewport rather than editing
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            InputKey::Up
                | InputKey::Down
                | InputKey::Left
                | InputKey::Right
                | InputKey::Home
                | InputKey::End
                | InputKey::PageUp
                | InputKey::PageDown
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text_only_for_plain_chars() {
        assert_eq!(InputKey::Char('a').as_text(), Some('a'));
        assert_eq!(InputKey::Char(' ').as_text(), Some(' '));
        assert_eq!(InputKey::CharCtrl('a').as_text(), None);
        assert_eq!(InputKey::Enter.as_text(), None);
        assert_eq!(InputKey::Char('\u{7}').as_text(), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert!(InputKey::Up.is_navigation());
        assert!(InputKey::PageDown.is_navigation());
        assert!(!InputKey::Backspace.is_navigation());
        assert!(!InputKey::Char('j').is_navigation());
    }
}

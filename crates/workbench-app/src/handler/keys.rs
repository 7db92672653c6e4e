//! Key event handlers for each panel

use workbench_core::{PanelId, PanelKind, ViewMode};

use crate::buffer::CursorMove;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::project::ConfigTab;
use crate::state::AppState;

/// Lines moved per PageUp/PageDown
const PAGE_STEP: i16 = 10;

/// Convert key events to messages based on the focused panel
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(key) {
        return Some(msg);
    }

    match state.focused_kind() {
        Some(PanelKind::Content) => handle_key_content(state, key),
        Some(PanelKind::Assistant) => handle_key_assistant(key),
        Some(PanelKind::Config) => handle_key_config(state, key),
        None => handle_key_unfocused(key),
    }
}

/// Bindings that work regardless of focus
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),

        // View mode
        InputKey::CharCtrl('p') | InputKey::F(2) => Some(Message::ToggleViewMode),

        // Layout
        InputKey::CharCtrl('b') => Some(Message::ToggleCollapseFocused),
        InputKey::F(n @ 5..=7) => Some(Message::ToggleCollapse(PanelId(usize::from(n - 5)))),
        InputKey::F(8) => Some(Message::ResizeFocused { grow: false }),
        InputKey::F(9) => Some(Message::ResizeFocused { grow: true }),
        _ => None,
    }
}

fn handle_key_content(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('r') => return Some(Message::ResetBuffer),
        InputKey::CharCtrl('y') => return Some(Message::CopyBuffer),
        _ => {}
    }

    match state.view_mode {
        ViewMode::Source => handle_key_source(key),
        ViewMode::Preview => handle_key_preview(key),
    }
}

fn handle_key_source(key: InputKey) -> Option<Message> {
    if let Some(c) = key.as_text() {
        return Some(Message::BufferInsert(c));
    }

    match key {
        InputKey::Enter => Some(Message::BufferNewline),
        InputKey::Backspace => Some(Message::BufferBackspace),
        InputKey::Delete => Some(Message::BufferDelete),
        InputKey::Left => Some(Message::BufferCursor(CursorMove::Left)),
        InputKey::Right => Some(Message::BufferCursor(CursorMove::Right)),
        InputKey::Up => Some(Message::BufferCursor(CursorMove::Up)),
        InputKey::Down => Some(Message::BufferCursor(CursorMove::Down)),
        InputKey::Home => Some(Message::BufferCursor(CursorMove::Home)),
        InputKey::End => Some(Message::BufferCursor(CursorMove::End)),
        _ => None,
    }
}

fn handle_key_preview(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollPreview(-1)),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollPreview(1)),
        InputKey::PageUp => Some(Message::ScrollPreview(-PAGE_STEP)),
        InputKey::PageDown => Some(Message::ScrollPreview(PAGE_STEP)),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollPreview(i16::MIN)),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollPreview(i16::MAX)),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_assistant(key: InputKey) -> Option<Message> {
    if let Some(c) = key.as_text() {
        return Some(Message::ChatInput(c));
    }

    match key {
        InputKey::Enter => Some(Message::SubmitPrompt),
        InputKey::Backspace => Some(Message::ChatBackspace),
        InputKey::Esc => Some(Message::ClearChatInput),
        InputKey::CharCtrl('r') => Some(Message::RetryExchange),
        InputKey::Up => Some(Message::ScrollChat(1)),
        InputKey::Down => Some(Message::ScrollChat(-1)),
        InputKey::PageUp => Some(Message::ScrollChat(PAGE_STEP)),
        InputKey::PageDown => Some(Message::ScrollChat(-PAGE_STEP)),
        InputKey::End => Some(Message::ScrollChat(i16::MIN)),
        _ => None,
    }
}

fn handle_key_config(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Left | InputKey::Right | InputKey::Char('h' | 'l') => {
            Some(Message::SwitchConfigTab)
        }
        InputKey::Char('+' | '=') => Some(Message::ResizeFocused { grow: true }),
        InputKey::Char('-') => Some(Message::ResizeFocused { grow: false }),
        _ => match state.project.tab {
            ConfigTab::Project => match key {
                InputKey::Up | InputKey::Char('k') => Some(Message::PreviousPage),
                InputKey::Down | InputKey::Char('j') => Some(Message::NextPage),
                InputKey::Char('f') | InputKey::Enter => Some(Message::CycleFramework),
                _ => None,
            },
            ConfigTab::Components => match key {
                InputKey::Up | InputKey::Char('k') => Some(Message::PalettePrevious),
                InputKey::Down | InputKey::Char('j') => Some(Message::PaletteNext),
                InputKey::Enter | InputKey::Char(' ') => Some(Message::AddSelectedComponent),
                _ => None,
            },
        },
    }
}

/// Every panel is collapsed
fn handle_key_unfocused(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

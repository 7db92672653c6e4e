//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{chat, editor, keys::handle_key, layout, project, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if !state.chat.is_idle() {
                state.tick_count = state.tick_count.wrapping_add(1);
            }
            state.copy_notice_ticks = state.copy_notice_ticks.saturating_sub(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus & Layout
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus_next();
            UpdateResult::none()
        }
        Message::FocusPrevious => {
            state.focus_previous();
            UpdateResult::none()
        }
        Message::FocusPanel(id) => {
            state.focus_panel(id);
            UpdateResult::none()
        }
        Message::ToggleCollapse(id) => layout::handle_toggle_collapse(state, id),
        Message::ToggleCollapseFocused => layout::handle_toggle_collapse_focused(state),
        Message::SetPanelSize { panel, fraction } => {
            layout::handle_set_size(state, panel, fraction)
        }
        Message::ResizePanel { panel, delta } => layout::handle_resize(state, panel, delta),
        Message::ResizeFocused { grow } => layout::handle_resize_focused(state, grow),

        // ─────────────────────────────────────────────────────────
        // Content pane
        // ─────────────────────────────────────────────────────────
        Message::SetViewMode(mode) => editor::handle_set_view_mode(state, mode),
        Message::ToggleViewMode => {
            let mode = state.view_mode.toggled();
            editor::handle_set_view_mode(state, mode)
        }
        Message::BufferInsert(c) => editor::handle_edit(state, |b| b.insert_char(c)),
        Message::BufferNewline => editor::handle_edit(state, |b| b.insert_newline()),
        Message::BufferBackspace => editor::handle_edit(state, |b| b.backspace()),
        Message::BufferDelete => editor::handle_edit(state, |b| b.delete()),
        Message::BufferCursor(movement) => editor::handle_cursor(state, movement),
        Message::ResetBuffer => editor::handle_reset(state),
        Message::CopyBuffer => editor::handle_copy(state),
        Message::ScrollPreview(delta) => editor::handle_scroll_preview(state, delta),

        // ─────────────────────────────────────────────────────────
        // Assistant
        // ─────────────────────────────────────────────────────────
        Message::ChatInput(c) => {
            state.chat_input.push(c);
            UpdateResult::none()
        }
        Message::ChatBackspace => {
            state.chat_input.pop();
            UpdateResult::none()
        }
        Message::ClearChatInput => {
            state.chat_input.clear();
            UpdateResult::none()
        }
        Message::SubmitPrompt => chat::handle_submit_prompt(state),
        Message::SubmitText(text) => chat::handle_submit(state, &text),
        Message::RetryExchange => chat::handle_retry(state),
        Message::ScrollChat(delta) => chat::handle_scroll(state, delta),
        Message::AssistantReplied {
            exchange,
            placeholder,
            text,
        } => chat::handle_replied(state, exchange, placeholder, text),
        Message::AssistantFailed {
            exchange,
            placeholder,
            reason,
        } => chat::handle_failed(state, exchange, placeholder, reason),

        // ─────────────────────────────────────────────────────────
        // Configuration panel
        // ─────────────────────────────────────────────────────────
        Message::NextPage => project::handle(state, |p| p.next_page()),
        Message::PreviousPage => project::handle(state, |p| p.previous_page()),
        Message::SelectPage(index) => project::handle(state, |p| p.select_page(index)),
        Message::SwitchConfigTab => project::handle(state, |p| p.tab = p.tab.toggled()),
        Message::CycleFramework => project::handle(state, |p| p.cycle_framework()),
        Message::PaletteNext => project::handle(state, |p| p.palette_next()),
        Message::PalettePrevious => project::handle(state, |p| p.palette_previous()),
        Message::AddSelectedComponent => project::handle_add_component(state),
    }
}

//! Content buffer and view mode handlers

use workbench_core::prelude::*;
use workbench_core::{render_preview, ViewMode};

use crate::buffer::{ContentBuffer, CursorMove};
use crate::state::AppState;

use super::UpdateResult;

pub fn handle_set_view_mode(state: &mut AppState, mode: ViewMode) -> UpdateResult {
    if state.set_view_mode(mode) {
        debug!("View mode -> {}", mode.label());
    }
    UpdateResult::none()
}

/// Apply an edit to the buffer; ignored outside source mode
pub fn handle_edit(state: &mut AppState, edit: impl FnOnce(&mut ContentBuffer)) -> UpdateResult {
    if state.accepts_edits() {
        edit(&mut state.buffer);
    } else {
        trace!("Dropping buffer edit in preview mode");
    }
    UpdateResult::none()
}

pub fn handle_cursor(state: &mut AppState, movement: CursorMove) -> UpdateResult {
    if state.accepts_edits() {
        state.buffer.move_cursor(movement);
    }
    UpdateResult::none()
}

/// Restore the initial text; ignored outside source mode
pub fn handle_reset(state: &mut AppState) -> UpdateResult {
    if !state.accepts_edits() {
        trace!("Ignoring reset in preview mode");
        return UpdateResult::none();
    }
    state.buffer.reset();
    state.preview_scroll = 0;
    info!("Content buffer reset to initial text");
    UpdateResult::none()
}

/// Copying reads the buffer, so it works in both modes
pub fn handle_copy(state: &mut AppState) -> UpdateResult {
    state.copy_buffer();
    info!("Copied {} chars to the clipboard", state.buffer.text().chars().count());
    UpdateResult::none()
}

pub fn handle_scroll_preview(state: &mut AppState, delta: i16) -> UpdateResult {
    if state.view_mode != ViewMode::Preview {
        return UpdateResult::none();
    }
    let line_count = render_preview(state.buffer.text()).len();
    let max = u16::try_from(line_count.saturating_sub(1)).unwrap_or(u16::MAX);
    state.preview_scroll = state.preview_scroll.saturating_add_signed(delta).min(max);
    UpdateResult::none()
}

//! Focus, resize and collapse handlers

use workbench_core::PanelId;

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_toggle_collapse(state: &mut AppState, id: PanelId) -> UpdateResult {
    let was_hidden = state.layout.visible_ids().is_empty();
    state.layout.toggle_collapse(id);

    // Expanding into an empty workspace takes focus
    if was_hidden && state.layout.is_collapsed(id) == Some(false) {
        state.focus = Some(id);
    }
    state.repair_focus();
    UpdateResult::none()
}

pub fn handle_toggle_collapse_focused(state: &mut AppState) -> UpdateResult {
    match state.focus {
        Some(id) => handle_toggle_collapse(state, id),
        None => UpdateResult::none(),
    }
}

pub fn handle_set_size(state: &mut AppState, id: PanelId, fraction: f64) -> UpdateResult {
    state.layout.set_size(id, fraction);
    UpdateResult::none()
}

pub fn handle_resize(state: &mut AppState, id: PanelId, delta: f64) -> UpdateResult {
    state.layout.resize_by(id, delta);
    UpdateResult::none()
}

pub fn handle_resize_focused(state: &mut AppState, grow: bool) -> UpdateResult {
    let Some(id) = state.focus else {
        return UpdateResult::none();
    };
    let step = state.settings.layout.resize_step.abs();
    let delta = if grow { step } else { -step };
    handle_resize(state, id, delta)
}

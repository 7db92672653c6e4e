//! Configuration panel handlers

use workbench_core::prelude::*;

use crate::project::ProjectState;
use crate::state::AppState;

use super::UpdateResult;

pub fn handle(state: &mut AppState, apply: impl FnOnce(&mut ProjectState)) -> UpdateResult {
    apply(&mut state.project);
    UpdateResult::none()
}

pub fn handle_add_component(state: &mut AppState) -> UpdateResult {
    if let Some(component) = state.project.add_selected_component() {
        info!(
            "Added {} to page {}",
            component,
            state.project.active_page().name
        );
    }
    UpdateResult::none()
}

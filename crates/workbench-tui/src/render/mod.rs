//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use workbench_app::layout::PanelState;
use workbench_app::AppState;
use workbench_core::PanelKind;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to state: scroll clamping happens here on copies, the
/// handlers own every mutation.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let preset = if state.settings.layout.panels.is_empty() {
        state.settings.layout.preset.name()
    } else {
        "custom"
    };
    let header =
        widgets::MainHeader::new(&state.project.name, &state.project.framework).preset(preset);
    frame.render_widget(header, areas.header);

    for column in layout::panel_areas(areas.body, &state.layout) {
        let Some(panel) = state.layout.get(column.id) else {
            continue;
        };
        render_panel(frame, state, panel, column.area);
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}

fn render_panel(frame: &mut Frame, state: &AppState, panel: &PanelState, area: Rect) {
    let focused = state.is_focused(panel.id);

    if panel.collapsed {
        frame.render_widget(
            widgets::CollapsedPanel::new(&panel.label).focused(focused),
            area,
        );
        return;
    }

    match panel.kind {
        PanelKind::Config => frame.render_widget(
            widgets::ConfigPanel::new(&state.project, &panel.label).focused(focused),
            area,
        ),
        PanelKind::Content => frame.render_widget(
            widgets::ContentPane::new(&state.buffer, state.view_mode, &panel.label)
                .focused(focused)
                .line_numbers(state.settings.editor.line_numbers)
                .preview_scroll(state.preview_scroll),
            area,
        ),
        PanelKind::Assistant => frame.render_widget(
            widgets::AssistantPanel::new(&state.chat, &state.chat_input, &panel.label)
                .focused(focused)
                .scroll(state.chat_scroll)
                .spinner(state.spinner()),
            area,
        ),
    }
}

//! Full-screen rendering tests

use super::view;
use crate::test_utils::TestTerminal;
use workbench_app::config::{LayoutPreset, Settings};
use workbench_app::handler::update;
use workbench_app::message::Message;
use workbench_app::AppState;
use workbench_core::{PanelId, ViewMode};

fn render_screen(state: &AppState, width: u16, height: u16) -> TestTerminal {
    let mut term = TestTerminal::with_size(width, height);
    term.draw_with(|frame| view(frame, state));
    term
}

fn state_with_text(text: &str) -> AppState {
    let mut settings = Settings::default();
    settings.editor.initial_text = Some(text.to_string());
    AppState::new(settings)
}

#[test]
fn test_default_screen_has_three_panels() {
    let state = AppState::default();
    let term = render_screen(&state, 120, 30);

    assert!(term.line_contains(1, "Workbench"));
    assert!(term.line_contains(1, "app-builder"));
    assert!(term.line_contains(3, "Configuration"));
    assert!(term.line_contains(3, "Editor"));
    assert!(term.line_contains(3, "AI Assistant"));
    assert!(term.line_contains(29, "Focus: Editor"));
}

#[test]
fn test_toggle_shows_preview_of_same_buffer() {
    let mut state = state_with_text("<h1>Pricing</h1>\n<p>Plans &amp; tiers</p>");
    let term = render_screen(&state, 120, 30);
    assert!(term.buffer_contains("<h1>Pricing</h1>"));

    update(&mut state, Message::ToggleViewMode);
    assert_eq!(state.view_mode, ViewMode::Preview);
    let term = render_screen(&state, 120, 30);
    assert!(term.buffer_contains("Pricing"));
    assert!(term.buffer_contains("Plans & tiers"));
    assert!(!term.buffer_contains("<h1>"));
}

#[test]
fn test_collapsed_panel_renders_as_strip() {
    let mut state = AppState::default();
    update(&mut state, Message::ToggleCollapse(PanelId(0)));
    let term = render_screen(&state, 120, 30);

    // The strip occupies the left edge; its label no longer appears as a title
    assert_eq!(term.cell_at(1, 4), Some("▸"));
    assert!(!term.line_contains(3, "Configuration"));
    assert!(term.line_contains(3, "Editor"));
}

#[test]
fn test_submitted_prompt_appears_in_log() {
    let mut state = AppState::default();
    update(&mut state, Message::SubmitText("make a contact form".into()));
    let term = render_screen(&state, 120, 30);

    assert!(term.buffer_contains("make a contact form"));
    assert!(term.buffer_contains("Thinking…"));
}

#[test]
fn test_split_editor_preset_header() {
    let mut settings = Settings::default();
    settings.layout.preset = LayoutPreset::SplitEditor;
    let state = AppState::new(settings);
    let term = render_screen(&state, 100, 24);

    assert!(term.line_contains(1, "split-editor"));
    assert!(!term.buffer_contains("AI Assistant"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let state = AppState::default();
    for (w, h) in [(1, 1), (10, 4), (20, 6)] {
        render_screen(&state, w, h);
    }
}

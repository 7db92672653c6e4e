//! Application state (Model in TEA pattern)

use workbench_core::prelude::*;
use workbench_core::{AppPhase, PanelId, PanelKind, ViewMode};

use crate::assistant::ReplyContext;
use crate::buffer::ContentBuffer;
use crate::chat::ChatLog;
use crate::config::Settings;
use crate::layout::PanelLayout;
use crate::project::ProjectState;

/// Spinner frames shown next to a pending reply
pub const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Ticks the "Copied!" notice stays up (about two seconds of idle polling)
pub const COPY_NOTICE_TICKS: u16 = 40;

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Settings the shell was mounted with
    pub settings: Settings,

    /// Panel sizes and collapsed flags
    pub layout: PanelLayout,

    /// Panel receiving keyboard input; `None` once every panel is collapsed
    pub focus: Option<PanelId>,

    /// Source or preview for the content pane
    pub view_mode: ViewMode,

    /// Text shown by the content pane in both modes
    pub buffer: ContentBuffer,

    /// First preview line shown in preview mode
    pub preview_scroll: u16,

    /// Assistant conversation
    pub chat: ChatLog,

    /// Prompt being typed in the assistant panel
    pub chat_input: String,

    /// Lines scrolled up from the bottom of the chat log (0 follows new messages)
    pub chat_scroll: u16,

    /// Project context for the configuration panel and assistant
    pub project: ProjectState,

    /// Spinner frame counter, advanced on ticks while a reply is pending
    pub tick_count: u64,

    /// Buffer text waiting to be written to the terminal clipboard
    pub clipboard: Option<String>,

    /// Ticks left before the "Copied!" notice disappears
    pub copy_notice_ticks: u16,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let layout = PanelLayout::from_settings(&settings.layout);
        let buffer = ContentBuffer::new(settings.editor.initial_text());
        let project = ProjectState::new(&settings.project);

        let focus = layout
            .panels()
            .iter()
            .find(|p| !p.collapsed && p.kind == PanelKind::Content)
            .or_else(|| layout.panels().iter().find(|p| !p.collapsed))
            .map(|p| p.id);

        debug!(
            "Mounting workspace: {} panels, preset {}",
            layout.len(),
            settings.layout.preset
        );

        Self {
            phase: AppPhase::Running,
            settings,
            layout,
            focus,
            view_mode: ViewMode::default(),
            buffer,
            preview_scroll: 0,
            chat: ChatLog::new(),
            chat_input: String::new(),
            chat_scroll: 0,
            project,
            tick_count: 0,
            clipboard: None,
            copy_notice_ticks: 0,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────

    /// Kind of the focused panel
    pub fn focused_kind(&self) -> Option<PanelKind> {
        self.focus
            .and_then(|id| self.layout.get(id))
            .map(|p| p.kind)
    }

    pub fn is_focused(&self, id: PanelId) -> bool {
        self.focus == Some(id)
    }

    /// Move focus to the next visible panel (wrapping)
    pub fn focus_next(&mut self) {
        self.cycle_focus(true);
    }

    /// Move focus to the previous visible panel (wrapping)
    pub fn focus_previous(&mut self) {
        self.cycle_focus(false);
    }

    /// Focus a panel if it is visible
    pub fn focus_panel(&mut self, id: PanelId) {
        if self.layout.is_collapsed(id) == Some(false) {
            self.focus = Some(id);
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let visible = self.layout.visible_ids();
        if visible.is_empty() {
            self.focus = None;
            return;
        }

        let position = self
            .focus
            .and_then(|id| visible.iter().position(|v| *v == id));
        let next = match (position, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % visible.len(),
            (Some(i), false) => (i + visible.len() - 1) % visible.len(),
        };
        self.focus = Some(visible[next]);
    }

    /// Keep focus on a visible panel after the layout changed
    pub fn repair_focus(&mut self) {
        let focused_visible = self
            .focus
            .is_some_and(|id| self.layout.is_collapsed(id) == Some(false));
        if focused_visible {
            return;
        }

        // Prefer the nearest visible panel to the right, then to the left
        let visible = self.layout.visible_ids();
        self.focus = match self.focus {
            Some(old) => visible
                .iter()
                .find(|id| **id > old)
                .or_else(|| visible.iter().rev().find(|id| **id < old))
                .copied(),
            None => visible.first().copied(),
        };
    }

    // ─────────────────────────────────────────────────────────
    // Content pane
    // ─────────────────────────────────────────────────────────

    pub fn set_view_mode(&mut self, mode: ViewMode) -> bool {
        if self.view_mode == mode {
            return false;
        }
        self.view_mode = mode;
        self.preview_scroll = 0;
        true
    }

    /// Buffer edits are accepted only in source mode
    pub fn accepts_edits(&self) -> bool {
        self.view_mode == ViewMode::Source
    }

    /// Queue the whole buffer for the clipboard and show the notice
    pub fn copy_buffer(&mut self) {
        self.clipboard = Some(self.buffer.text().to_string());
        self.copy_notice_ticks = COPY_NOTICE_TICKS;
    }

    /// Hand the queued clipboard text to the front end
    pub fn take_clipboard(&mut self) -> Option<String> {
        self.clipboard.take()
    }

    pub fn copy_notice_visible(&self) -> bool {
        self.copy_notice_ticks > 0
    }

    // ─────────────────────────────────────────────────────────
    // Assistant
    // ─────────────────────────────────────────────────────────

    pub fn reply_context(&self) -> ReplyContext {
        ReplyContext::from_project(&self.project)
    }

    /// Spinner glyph for the current tick
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[(self.tick_count as usize) % SPINNER_FRAMES.len()]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutPreset;

    fn state_with(preset: LayoutPreset) -> AppState {
        let mut settings = Settings::default();
        settings.layout.preset = preset;
        AppState::new(settings)
    }

    #[test]
    fn test_initial_focus_is_content() {
        let state = AppState::default();
        assert_eq!(state.focused_kind(), Some(PanelKind::Content));
        assert_eq!(state.view_mode, ViewMode::Source);
        assert!(state.buffer.text().contains("My Awesome App"));
    }

    #[test]
    fn test_focus_cycles_over_visible_panels() {
        let mut state = state_with(LayoutPreset::SplitEditor);
        // Config panel starts collapsed
        assert_eq!(state.focus, Some(PanelId(1)));
        state.focus_next();
        assert_eq!(state.focus, Some(PanelId(1)));

        let mut state = AppState::default();
        state.focus_next();
        assert_eq!(state.focused_kind(), Some(PanelKind::Assistant));
        state.focus_next();
        assert_eq!(state.focused_kind(), Some(PanelKind::Config));
        state.focus_previous();
        assert_eq!(state.focused_kind(), Some(PanelKind::Assistant));
    }

    #[test]
    fn test_repair_focus_after_collapse() {
        let mut state = AppState::default();
        state.focus = Some(PanelId(2));
        state.layout.toggle_collapse(PanelId(2));
        state.repair_focus();
        assert_eq!(state.focus, Some(PanelId(1)));

        state.layout.toggle_collapse(PanelId(1));
        state.layout.toggle_collapse(PanelId(0));
        state.repair_focus();
        assert_eq!(state.focus, None);
    }

    #[test]
    fn test_focus_panel_ignores_collapsed() {
        let mut state = state_with(LayoutPreset::SplitEditor);
        state.focus_panel(PanelId(0));
        assert_eq!(state.focus, Some(PanelId(1)));
    }

    #[test]
    fn test_set_view_mode_reports_change() {
        let mut state = AppState::default();
        assert!(!state.set_view_mode(ViewMode::Source));
        assert!(state.set_view_mode(ViewMode::Preview));
        assert!(!state.accepts_edits());
    }
}

//! Status bar widget
//!
//! Displays the content view mode, the focused panel, the assistant's
//! exchange state and the most useful key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use workbench_app::{AppState, ExchangePhase};

use crate::theme::styles;

const KEY_HINTS: [(&str, &str); 4] = [
    ("Tab", "focus"),
    ("^P", "preview"),
    ("^B", "collapse"),
    ("^C", "quit"),
];

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn mode_badge(&self) -> Span<'static> {
        let mode = self.state.view_mode;
        Span::styled(format!(" {} ", mode.label()), styles::view_mode_badge(mode))
    }

    fn focus_label(&self) -> Span<'a> {
        match self.state.focus.and_then(|id| self.state.layout.get(id)) {
            Some(panel) => Span::styled(panel.label.as_str(), styles::text_primary()),
            None => Span::styled("none", styles::text_muted()),
        }
    }

    /// Exchange indicator for the assistant chat
    fn assistant_indicator(&self) -> Span<'static> {
        match self.state.chat.phase() {
            ExchangePhase::AssistantPending | ExchangePhase::UserSubmitted => Span::styled(
                format!("{} Thinking", self.state.spinner()),
                styles::status_yellow(),
            ),
            _ if self.state.chat.can_retry() => {
                Span::styled("✗ Reply failed", styles::status_red())
            }
            _ => Span::styled("● Ready", styles::status_green()),
        }
    }

    fn hints() -> Line<'static> {
        let mut spans = Vec::new();
        for (key, action) in KEY_HINTS {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut left = Line::from(vec![
            Span::raw(" "),
            self.mode_badge(),
            Span::styled("  Focus: ", styles::text_muted()),
            self.focus_label(),
            Span::styled("  │  ", styles::text_muted()),
            self.assistant_indicator(),
        ]);
        if self.state.copy_notice_visible() {
            left.push_span(Span::styled("  ✓ Copied!", styles::status_green()));
        }
        let left_width = left.width() as u16;
        Paragraph::new(left).render(area, buf);

        let hints = Self::hints();
        let hints_width = hints.width() as u16;
        if left_width + hints_width <= area.width {
            let hints_area = Rect {
                x: area.right() - hints_width,
                y: area.y,
                width: hints_width,
                height: 1,
            };
            Paragraph::new(hints).render(hints_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use workbench_core::ViewMode;

    fn render(state: &AppState, width: u16) -> TestTerminal {
        let mut term = TestTerminal::with_size(width, 1);
        term.render_widget(StatusBar::new(state), term.area());
        term
    }

    #[test]
    fn test_shows_mode_focus_and_ready() {
        let state = AppState::default();
        let term = render(&state, 100);
        assert!(term.buffer_contains(" Code "));
        assert!(term.buffer_contains("Focus: Editor"));
        assert!(term.buffer_contains("● Ready"));
        assert!(term.buffer_contains("^C quit"));
    }

    #[test]
    fn test_reflects_preview_and_pending() {
        let mut state = AppState::default();
        state.set_view_mode(ViewMode::Preview);
        state.chat.submit("hello");
        let term = render(&state, 100);
        assert!(term.buffer_contains(" Preview "));
        assert!(term.buffer_contains("Thinking"));
    }

    #[test]
    fn test_reports_failed_reply() {
        let mut state = AppState::default();
        let pending = state.chat.submit("hello").unwrap();
        state.chat.fail(pending.exchange, pending.placeholder, "offline");
        let term = render(&state, 100);
        assert!(term.buffer_contains("✗ Reply failed"));
    }

    #[test]
    fn test_copy_notice_expires_after_ticks() {
        let mut state = AppState::default();
        state.copy_buffer();
        assert!(render(&state, 100).buffer_contains("Copied!"));

        state.copy_notice_ticks = 0;
        assert!(!render(&state, 100).buffer_contains("Copied!"));
    }

    #[test]
    fn test_narrow_bar_drops_hints() {
        let state = AppState::default();
        let term = render(&state, 40);
        assert!(term.buffer_contains("Focus"));
        assert!(!term.buffer_contains("quit"));
    }
}

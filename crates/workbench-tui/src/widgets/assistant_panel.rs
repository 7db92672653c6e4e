//! Assistant panel: chat log above a prompt input box

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use workbench_app::{ChatLog, ChatMessage};
use workbench_core::MessagePhase;

use super::wrap::{tail_to_width, wrap_text};
use crate::theme::{palette, styles};

pub const INPUT_PLACEHOLDER: &str = "Ask me anything about your app...";
const WAITING_PLACEHOLDER: &str = "Waiting for the assistant...";
const EMPTY_LOG_TEXT: &str = "Ask about forms, layout, components or styling.";
const THINKING_TEXT: &str = "Thinking…";
const RETRY_HINT: &str = "Press Ctrl+R to retry";

/// Chat log and prompt input
pub struct AssistantPanel<'a> {
    chat: &'a ChatLog,
    input: &'a str,
    label: &'a str,
    focused: bool,
    scroll: u16,
    spinner: &'a str,
}

impl<'a> AssistantPanel<'a> {
    pub fn new(chat: &'a ChatLog, input: &'a str, label: &'a str) -> Self {
        Self {
            chat,
            input,
            label,
            focused: false,
            scroll: 0,
            spinner: "",
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Rows scrolled up from the newest message
    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn spinner(mut self, spinner: &'a str) -> Self {
        self.spinner = spinner;
        self
    }

    /// Every log row for a viewport `width` columns wide
    fn log_lines(&self, width: usize) -> Vec<Line<'static>> {
        let messages = self.chat.messages();
        let last_id = messages.last().map(|m| m.id);
        let mut lines = Vec::new();

        for (i, message) in messages.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(vec![
                Span::styled(message.author.label(), styles::author(message.author)),
                Span::styled(
                    format!("  {}", message.created_at.format("%H:%M")),
                    styles::text_muted(),
                ),
            ]));

            let show_retry = Some(message.id) == last_id && self.chat.can_retry();
            lines.extend(self.body_lines(message, width, show_retry));
        }
        lines
    }

    fn body_lines(&self, message: &ChatMessage, width: usize, show_retry: bool) -> Vec<Line<'static>> {
        match message.phase {
            MessagePhase::Pending => vec![Line::from(vec![
                Span::styled(format!("{} ", self.spinner), styles::accent()),
                Span::styled(THINKING_TEXT, styles::text_muted()),
            ])],
            MessagePhase::Complete => wrap_text(&message.text, width)
                .into_iter()
                .map(|row| Line::from(Span::styled(row, styles::text_primary())))
                .collect(),
            MessagePhase::Failed => {
                let mut rows: Vec<Line> = wrap_text(&message.text, width)
                    .into_iter()
                    .map(|row| Line::from(Span::styled(row, styles::status_red())))
                    .collect();
                if show_retry {
                    rows.push(Line::from(Span::styled(RETRY_HINT, styles::keybinding())));
                }
                rows
            }
        }
    }

    fn render_log(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        if self.chat.is_empty() {
            let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
            Paragraph::new(Span::styled(EMPTY_LOG_TEXT, styles::text_muted()))
                .alignment(Alignment::Center)
                .render(row, buf);
            return;
        }

        let lines = self.log_lines(area.width as usize);
        let height = area.height as usize;
        let max_offset = lines.len().saturating_sub(height);
        let offset = (self.scroll as usize).min(max_offset);
        let start = lines.len().saturating_sub(height + offset);

        let visible: Vec<Line> = lines.into_iter().skip(start).take(height).collect();
        Paragraph::new(visible).render(area, buf);
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).style(Style::default().bg(palette::INPUT_BG));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let line = if self.input.is_empty() {
            let placeholder = if self.chat.is_idle() {
                INPUT_PLACEHOLDER
            } else {
                WAITING_PLACEHOLDER
            };
            Line::from(Span::styled(placeholder, styles::text_muted()))
        } else {
            // Show the tail so the insertion point stays visible
            let room = (inner.width as usize).saturating_sub(1);
            let mut spans = vec![Span::styled(
                tail_to_width(self.input, room).to_string(),
                styles::text_primary(),
            )];
            if self.focused {
                spans.push(Span::styled("▏", styles::accent()));
            }
            Line::from(spans)
        };
        Paragraph::new(line).render(inner, buf);
    }
}

impl Widget for AssistantPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(Line::from(vec![
            Span::raw(" "),
            Span::styled(self.label, styles::text_primary()),
            Span::raw(" "),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let [log_area, input_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(inner);
        self.render_log(log_area, buf);
        self.render_input(input_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(panel: AssistantPanel<'_>, width: u16, height: u16) -> TestTerminal {
        let mut term = TestTerminal::with_size(width, height);
        term.render_widget(panel, term.area());
        term
    }

    #[test]
    fn test_empty_log_shows_hint_and_placeholder() {
        let chat = ChatLog::new();
        let term = render(AssistantPanel::new(&chat, "", "AI Assistant"), 60, 12);

        assert!(term.line_contains(0, "AI Assistant"));
        assert!(term.buffer_contains(EMPTY_LOG_TEXT));
        assert!(term.buffer_contains(INPUT_PLACEHOLDER));
    }

    #[test]
    fn test_pending_reply_shows_spinner() {
        let mut chat = ChatLog::new();
        chat.submit("build a form");
        let term = render(
            AssistantPanel::new(&chat, "", "AI Assistant").spinner("⠙"),
            60,
            12,
        );

        assert!(term.buffer_contains("You"));
        assert!(term.buffer_contains("build a form"));
        assert!(term.buffer_contains("⠙ Thinking…"));
        assert!(term.buffer_contains(WAITING_PLACEHOLDER));
    }

    #[test]
    fn test_failed_reply_offers_retry() {
        let mut chat = ChatLog::new();
        let pending = chat.submit("hello").unwrap();
        chat.fail(pending.exchange, pending.placeholder, "provider offline");
        let term = render(AssistantPanel::new(&chat, "", "AI Assistant"), 60, 14);

        assert!(term.buffer_contains("provider offline"));
        assert!(term.buffer_contains(RETRY_HINT));
    }

    #[test]
    fn test_log_sticks_to_newest_message() {
        let mut chat = ChatLog::new();
        for i in 0..6 {
            let pending = chat.submit(&format!("question {}", i)).unwrap();
            chat.complete(pending.exchange, pending.placeholder, format!("answer {}", i));
        }
        let term = render(AssistantPanel::new(&chat, "", "AI Assistant"), 40, 12);
        assert!(term.buffer_contains("answer 5"));
        assert!(!term.buffer_contains("question 0"));

        // Scrolling far past the top clamps to the oldest message
        let term = render(
            AssistantPanel::new(&chat, "", "AI Assistant").scroll(u16::MAX),
            40,
            12,
        );
        assert!(term.buffer_contains("question 0"));
        assert!(!term.buffer_contains("answer 5"));
    }

    #[test]
    fn test_long_input_shows_tail() {
        let chat = ChatLog::new();
        let input = "please make the hero section much taller and add a gradient";
        let term = render(
            AssistantPanel::new(&chat, input, "AI Assistant").focused(true),
            30,
            10,
        );
        assert!(term.buffer_contains("gradient▏"));
        assert!(!term.buffer_contains("please"));
    }
}

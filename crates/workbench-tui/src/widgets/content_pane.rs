//! Content pane: code editor or live preview of the same buffer

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use workbench_app::ContentBuffer;
use workbench_core::{render_preview, PreviewLine, PreviewLineKind, ViewMode};

use crate::theme::{palette, styles};

const EMPTY_PREVIEW_TEXT: &str = "Live Preview Area";

/// The editor/preview pane
pub struct ContentPane<'a> {
    buffer: &'a ContentBuffer,
    mode: ViewMode,
    label: &'a str,
    focused: bool,
    line_numbers: bool,
    preview_scroll: u16,
}

impl<'a> ContentPane<'a> {
    pub fn new(buffer: &'a ContentBuffer, mode: ViewMode, label: &'a str) -> Self {
        Self {
            buffer,
            mode,
            label,
            focused: false,
            line_numbers: true,
            preview_scroll: 0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    pub fn preview_scroll(mut self, scroll: u16) -> Self {
        self.preview_scroll = scroll;
        self
    }

    fn title(&self) -> Line<'a> {
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(self.label, styles::text_primary()),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", self.mode.label()),
                styles::view_mode_badge(self.mode),
            ),
        ];
        if self.mode == ViewMode::Source && self.buffer.is_modified() {
            spans.push(Span::styled(" ●", styles::status_yellow()));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }

    fn render_source(&self, area: Rect, buf: &mut Buffer) {
        let height = area.height as usize;
        let (cursor_line, cursor_col) = self.buffer.cursor_position();
        let line_count = self.buffer.line_count();

        let gutter_width = if self.line_numbers {
            line_count.to_string().len().max(2) + 1
        } else {
            0
        };
        let text_width = (area.width as usize).saturating_sub(gutter_width).max(1);

        // Keep the cursor inside the viewport in both directions
        let top = cursor_line.saturating_sub(height.saturating_sub(1));
        let left = cursor_col.saturating_sub(text_width - 1);

        let lines: Vec<Line> = self
            .buffer
            .lines()
            .enumerate()
            .skip(top)
            .take(height)
            .map(|(i, text)| {
                let mut spans = Vec::new();
                if self.line_numbers {
                    spans.push(Span::styled(
                        format!("{:>w$} ", i + 1, w = gutter_width - 1),
                        Style::default().fg(palette::GUTTER),
                    ));
                }
                let visible: String = text.chars().skip(left).take(text_width).collect();
                if self.focused && i == cursor_line {
                    spans.extend(cursor_spans(&visible, cursor_col - left));
                } else {
                    spans.push(Span::styled(visible, styles::text_primary()));
                }
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }

    fn render_preview(&self, area: Rect, buf: &mut Buffer) {
        let rendered = render_preview(self.buffer.text());
        if rendered.is_empty() {
            let y = area.y + area.height / 2;
            let row = Rect::new(area.x, y, area.width, 1);
            Paragraph::new(Span::styled(EMPTY_PREVIEW_TEXT, styles::text_muted()))
                .alignment(Alignment::Center)
                .render(row, buf);
            return;
        }

        let lines: Vec<Line> = rendered.iter().map(preview_line).collect();
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((self.preview_scroll, 0))
            .render(area, buf);
    }
}

/// Split a line around the cursor column so the cursor cell is reversed
fn cursor_spans(text: &str, col: usize) -> Vec<Span<'static>> {
    let before: String = text.chars().take(col).collect();
    let at: String = text.chars().nth(col).map_or(" ".to_string(), String::from);
    let after: String = text.chars().skip(col + 1).collect();
    vec![
        Span::styled(before, styles::text_primary()),
        Span::styled(at, styles::cursor()),
        Span::styled(after, styles::text_primary()),
    ]
}

fn preview_line(line: &PreviewLine) -> Line<'static> {
    match line.kind {
        PreviewLineKind::Heading(level) => {
            let mut style = styles::accent_bold();
            if level == 1 {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            Line::from(Span::styled(line.text.clone(), style))
        }
        PreviewLineKind::Bullet => Line::from(vec![
            Span::styled("  • ", styles::accent()),
            Span::styled(line.text.clone(), styles::text_primary()),
        ]),
        PreviewLineKind::Text => Line::from(Span::styled(line.text.clone(), styles::text_primary())),
    }
}

impl Widget for ContentPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        match self.mode {
            ViewMode::Source => self.render_source(inner, buf),
            ViewMode::Preview => self.render_preview(inner, buf),
        }
    }
}

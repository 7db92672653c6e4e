//! Header bar widget
//!
//! Shows the app title, project name and framework on the left and the
//! active layout preset on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Main header showing app title, project and preset
pub struct MainHeader<'a> {
    project_name: &'a str,
    framework: &'a str,
    preset: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(project_name: &'a str, framework: &'a str) -> Self {
        Self {
            project_name,
            framework,
            preset: "",
        }
    }

    pub fn preset(mut self, preset: &'a str) -> Self {
        self.preset = preset;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled("◆", styles::accent()),
            Span::raw(" "),
            Span::styled("Workbench", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", Style::default().fg(palette::TEXT_MUTED)),
            Span::raw(" "),
            Span::styled(self.project_name, styles::text_primary()),
            Span::raw(" "),
            Span::styled(format!("({})", self.framework), styles::text_muted()),
        ]);
        let left_width = left.width() as u16;
        Paragraph::new(left).render(inner, buf);

        if self.preset.is_empty() {
            return;
        }

        // Preset pill on the right, dropped when it would overlap the title
        let right = Line::from(vec![
            Span::styled("layout ", styles::text_muted()),
            Span::styled(self.preset, styles::text_secondary()),
            Span::raw(" "),
        ]);
        let right_width = right.width() as u16;
        if left_width + right_width + 1 <= inner.width {
            let right_area = Rect {
                x: inner.right() - right_width,
                y: inner.y,
                width: right_width,
                height: 1,
            };
            Paragraph::new(right).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_project_and_preset() {
        let mut term = TestTerminal::new();
        let header = MainHeader::new("Storefront", "vue").preset("app-builder");
        let area = Rect::new(0, 0, 80, 3);
        term.render_widget(header, area);

        assert!(term.line_contains(1, "Workbench"));
        assert!(term.line_contains(1, "Storefront"));
        assert!(term.line_contains(1, "(vue)"));
        assert!(term.line_contains(1, "app-builder"));
    }

    #[test]
    fn test_narrow_header_drops_preset() {
        let mut term = TestTerminal::with_size(30, 3);
        let header = MainHeader::new("Storefront", "vue").preset("dev-environment");
        term.render_widget(header, term.area());

        assert!(term.buffer_contains("Workbench"));
        assert!(!term.buffer_contains("dev-environment"));
    }
}

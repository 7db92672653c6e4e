//! Narrow strip drawn in place of a collapsed panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Collapsed panel: an expand marker above the label written top to bottom
pub struct CollapsedPanel<'a> {
    label: &'a str,
    focused: bool,
}

impl<'a> CollapsedPanel<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for CollapsedPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut lines = vec![Line::from(Span::styled("▸", styles::accent())), Line::default()];
        lines.extend(
            self.label
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| Line::from(Span::styled(c.to_string(), styles::text_secondary()))),
        );
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_label_runs_vertically() {
        let mut term = TestTerminal::with_size(3, 12);
        term.render_widget(CollapsedPanel::new("Config"), term.area());

        assert_eq!(term.cell_at(1, 1), Some("▸"));
        assert_eq!(term.cell_at(1, 3), Some("C"));
        assert_eq!(term.cell_at(1, 4), Some("o"));
        assert_eq!(term.cell_at(1, 8), Some("g"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let mut term = TestTerminal::with_size(2, 2);
        term.render_widget(CollapsedPanel::new("Editor"), term.area());
    }
}

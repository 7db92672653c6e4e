//! Configuration panel: project settings and the component palette

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use workbench_app::project::{ConfigTab, ProjectState};

use crate::theme::styles;

pub struct ConfigPanel<'a> {
    project: &'a ProjectState,
    label: &'a str,
    focused: bool,
}

impl<'a> ConfigPanel<'a> {
    pub fn new(project: &'a ProjectState, label: &'a str) -> Self {
        Self {
            project,
            label,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn tab_bar(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, tab) in [ConfigTab::Project, ConfigTab::Components].iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", styles::text_muted()));
            }
            let style = if *tab == self.project.tab {
                styles::accent_bold().add_modifier(Modifier::UNDERLINED)
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(tab.label(), style));
        }
        Line::from(spans)
    }

    fn project_lines(&self) -> Vec<Line<'a>> {
        let project = self.project;
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Name       ", styles::text_muted()),
                Span::styled(project.name.as_str(), styles::text_primary()),
            ]),
            Line::from(vec![
                Span::styled("Framework  ", styles::text_muted()),
                Span::styled(project.framework.as_str(), styles::accent()),
            ]),
            Line::default(),
            Line::from(Span::styled("Pages", styles::text_secondary())),
        ];

        for (i, page) in project.pages().iter().enumerate() {
            let active = i == project.active_index();
            let marker = if active { "▸ " } else { "  " };
            let name_style = if active {
                styles::accent_bold()
            } else {
                styles::text_primary()
            };
            lines.push(Line::from(vec![
                Span::styled(marker, styles::accent()),
                Span::styled(page.name.as_str(), name_style),
                Span::raw(" "),
                Span::styled(page.route.as_str(), styles::text_muted()),
            ]));
        }

        let page = project.active_page();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("On {}", page.name),
            styles::text_secondary(),
        )));
        if page.components.is_empty() {
            lines.push(Line::from(Span::styled("  (no components)", styles::text_muted())));
        }
        for component in &page.components {
            lines.push(Line::from(vec![
                Span::styled("  ✓ ", styles::status_green()),
                Span::styled(component.as_str(), styles::text_primary()),
            ]));
        }
        lines
    }

    fn palette_lines(&self) -> Vec<Line<'a>> {
        let project = self.project;
        let page = project.active_page();
        let mut lines = Vec::new();

        if project.palette().is_empty() {
            lines.push(Line::from(Span::styled("No components configured", styles::text_muted())));
            return lines;
        }

        for (i, component) in project.palette().iter().enumerate() {
            let added = page.components.contains(component);
            let mark = if added { "✓ " } else { "+ " };
            let selected = i == project.palette_selected();
            let style = match (selected, self.focused) {
                (true, true) => styles::focused_selected(),
                (true, false) => styles::accent(),
                _ if added => styles::text_muted(),
                _ => styles::text_primary(),
            };
            lines.push(Line::from(Span::styled(format!("{}{}", mark, component), style)));
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Enter", styles::keybinding()),
            Span::styled(format!(" add to {}", page.name), styles::text_muted()),
        ]));
        lines
    }
}

impl Widget for ConfigPanel<'_> {
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

        let [tabs_area, _, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(self.tab_bar()).render(tabs_area, buf);

        let lines = match self.project.tab {
            ConfigTab::Project => self.project_lines(),
            ConfigTab::Components => self.palette_lines(),
        };
        Paragraph::new(lines).render(body_area, buf);
    }
}

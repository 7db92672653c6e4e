//! Screen layout definitions for the TUI
//!
//! The screen is a header, the panel row and a one-line status bar. Panel
//! columns come from [`PanelLayout::column_widths`], so the fractions the
//! layout manager enforces are exactly what gets drawn.

use ratatui::layout::{Constraint, Layout, Rect};
use workbench_app::layout::PanelLayout;
use workbench_core::PanelId;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar (glass container)
    pub header: Rect,

    /// Row holding every panel column
    pub body: Rect,

    /// Mode, focus and key hints
    pub status: Rect,
}

/// One panel column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelArea {
    pub id: PanelId,
    pub area: Rect,
    pub collapsed: bool,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header: top border + title row + bottom border
        Constraint::Min(3),    // Panels
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Split the body into panel columns, left to right in layout order.
///
/// Zero-width columns are dropped; a panel whose share rounds to nothing on
/// a narrow terminal is simply not drawn.
pub fn panel_areas(body: Rect, layout: &PanelLayout) -> Vec<PanelArea> {
    let widths = layout.column_widths(body.width);

    let mut x = body.x;
    let mut areas = Vec::with_capacity(widths.len());
    for (panel, width) in layout.panels().iter().zip(widths) {
        if width > 0 {
            areas.push(PanelArea {
                id: panel.id,
                area: Rect::new(x, body.y, width, body.height),
                collapsed: panel.collapsed,
            });
        }
        x = x.saturating_add(width);
    }
    areas
}

#[cfg(test)]
mod tests {
    use super::*;
    use workbench_app::config::{LayoutPreset, LayoutSettings};

    fn layout_for(preset: LayoutPreset) -> PanelLayout {
        PanelLayout::from_settings(&LayoutSettings {
            preset,
            ..Default::default()
        })
    }

    #[test]
    fn test_create_layout() {
        let areas = create(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.body.height, 20);
        assert_eq!(areas.status.y, 23);
    }

    #[test]
    fn test_panel_columns_fill_body() {
        let layout = layout_for(LayoutPreset::AppBuilder);
        let body = Rect::new(0, 3, 100, 20);
        let areas = panel_areas(body, &layout);

        assert_eq!(areas.len(), 3);
        assert_eq!(areas[0].area.x, 0);
        for pair in areas.windows(2) {
            assert_eq!(pair[0].area.right(), pair[1].area.x);
        }
        assert_eq!(areas.last().map(|a| a.area.right()), Some(100));
        assert!(areas.iter().all(|a| a.area.height == 20 && a.area.y == 3));
    }

    #[test]
    fn test_collapsed_panel_gets_strip_width() {
        let layout = layout_for(LayoutPreset::SplitEditor);
        let areas = panel_areas(Rect::new(0, 0, 80, 10), &layout);

        let strip = areas.iter().find(|a| a.collapsed).unwrap();
        assert_eq!(strip.area.width, layout.collapsed_width());
        let total: u16 = areas.iter().map(|a| a.area.width).sum();
        assert_eq!(total, 80);
    }

    #[test]
    fn test_columns_never_exceed_width() {
        let layout = layout_for(LayoutPreset::AppBuilder);
        for width in [0u16, 1, 5, 9, 37, 80, 211] {
            let areas = panel_areas(Rect::new(0, 0, width, 10), &layout);
            let total: u16 = areas.iter().map(|a| a.area.width).sum();
            assert!(total <= width, "width {}: {}", width, total);
        }
    }
}

//! Semantic style builders for the workspace shell.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use workbench_core::{Author, ViewMode};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" for the selected row of a focused list
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Header line for a chat message
pub fn author(author: Author) -> Style {
    let color = match author {
        Author::User => palette::AUTHOR_USER,
        Author::Assistant => palette::AUTHOR_ASSISTANT,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Badge shown next to the content pane title
pub fn view_mode_badge(mode: ViewMode) -> Style {
    match mode {
        ViewMode::Source => focused_selected(),
        ViewMode::Preview => Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(palette::STATUS_GREEN)
            .add_modifier(Modifier::BOLD),
    }
}

/// The editor cursor cell
pub fn cursor() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glass_block_border_follows_focus() {
        use ratatui::buffer::Buffer;
        use ratatui::layout::Rect;
        use ratatui::widgets::Widget;

        let area = Rect::new(0, 0, 4, 3);
        let mut focused = Buffer::empty(area);
        glass_block(true).render(area, &mut focused);
        assert_eq!(focused[(0, 0)].symbol(), "╭");
        assert_eq!(focused[(0, 0)].fg, palette::BORDER_ACTIVE);

        let mut idle = Buffer::empty(area);
        glass_block(false).render(area, &mut idle);
        assert_eq!(idle[(0, 0)].fg, palette::BORDER_DIM);
    }

    #[test]
    fn test_author_styles_differ() {
        assert_ne!(author(Author::User), author(Author::Assistant));
        assert!(author(Author::User).add_modifier.contains(Modifier::BOLD));
    }
}

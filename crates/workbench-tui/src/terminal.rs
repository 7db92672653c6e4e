//! Terminal setup, restoration and clipboard output

use std::io::stdout;

use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use ratatui::DefaultTerminal;
use workbench_core::prelude::*;

/// Enter raw mode on the alternate screen.
///
/// The returned terminal must be handed back through [`restore`] on every
/// exit path; a panic restores it automatically.
pub fn init() -> Result<DefaultTerminal> {
    ratatui::try_init().map_err(|e| {
        // Raw mode may already be on
        ratatui::restore();
        Error::TerminalInit(e.to_string())
    })
}

/// Leave raw mode and the alternate screen
pub fn restore() {
    ratatui::restore();
}

/// Put `text` on the system clipboard through an OSC 52 escape sequence
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    execute!(stdout(), CopyToClipboard::to_clipboard_from(text))
        .map_err(|e| Error::terminal(format!("Clipboard write failed: {}", e)))
}

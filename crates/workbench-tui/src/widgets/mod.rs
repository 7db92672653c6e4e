//! Custom widget components

mod assistant_panel;
mod collapsed_panel;
mod config_panel;
mod content_pane;
mod header;
mod status_bar;
pub mod wrap;

pub use assistant_panel::AssistantPanel;
pub use collapsed_panel::CollapsedPanel;
pub use config_panel::ConfigPanel;
pub use content_pane::ContentPane;
pub use header::MainHeader;
pub use status_bar::StatusBar;

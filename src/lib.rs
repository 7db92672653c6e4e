//! Workbench - terminal workspace shell
//!
//! Binary-side glue: process-wide setup (error reporting, logging) and the
//! two front ends, the ratatui shell and the line-oriented headless mode.

pub mod headless;

use workbench_app::config::Settings;
use workbench_core::prelude::*;

pub use headless::run_headless;

/// Install error reporting and file logging; call once before anything else
pub fn init() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    workbench_core::logging::init()?;
    Ok(())
}

/// Run the interactive terminal shell
pub async fn run(settings: Settings) -> Result<()> {
    let result = workbench_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Workbench exiting");
    result
}

//! Workbench - a terminal workspace shell with resizable panels, a live
//! preview and an assistant chat
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::{Path, PathBuf};

use clap::Parser;
use workbench_app::config::{self, LayoutPreset, Settings};
use workbench_core::prelude::*;

/// Workbench - a terminal workspace shell
#[derive(Parser, Debug)]
#[command(name = "workbench")]
#[command(about = "A terminal workspace shell with live preview and an assistant chat", long_about = None)]
struct Args {
    /// Configuration file (default: .workbench/config.toml in the working directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Layout preset: app-builder, dev-environment or split-editor
    #[arg(long, value_name = "NAME")]
    preset: Option<LayoutPreset>,

    /// Seed the editor buffer from a file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Run in headless mode (prompts on stdin, JSON events on stdout)
    #[arg(long)]
    headless: bool,

    /// Simulated assistant reply delay in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Write a default .workbench/config.toml and exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    workbench::init()?;

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init {
        let path = config::init_config_dir(&cwd).context("Writing default configuration")?;
        eprintln!("Wrote {}", path.display());
        return Ok(());
    }

    let mut settings = match &args.config {
        Some(path) => config::load_settings_from(path)
            .with_context(|| format!("Loading configuration from {}", path.display()))?,
        None => config::load_settings(&cwd),
    };
    apply_overrides(&mut settings, &args)?;

    if args.headless {
        workbench::run_headless(settings).await
    } else {
        workbench::run(settings).await
    }
}

/// Command-line flags win over the configuration file
fn apply_overrides(settings: &mut Settings, args: &Args) -> Result<()> {
    if let Some(preset) = args.preset {
        settings.layout.preset = preset;
        // An explicit preset replaces any panel list from the file
        settings.layout.panels.clear();
    }
    if let Some(delay) = args.delay_ms {
        settings.assistant.reply_delay_ms = delay;
    }
    if let Some(path) = &args.file {
        settings.editor.initial_text = Some(read_seed_file(path)?);
    }
    Ok(())
}

fn read_seed_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Reading seed file {}", path.display()))
}

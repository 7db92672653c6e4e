//! Configuration file parsing for Workbench
//!
//! Supports `.workbench/config.toml` in the working directory, or an explicit
//! path passed on the command line.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_dir, load_settings, load_settings_from};
pub use types::*;

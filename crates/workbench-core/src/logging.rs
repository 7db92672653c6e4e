//! Logging configuration using tracing
//!
//! The terminal belongs to the UI (or to NDJSON output in headless mode), so
//! logs only ever go to a daily rolling file.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable holding an `EnvFilter` directive string
pub const LOG_FILTER_ENV: &str = "WORKBENCH_LOG";

/// Environment variable overriding the log directory
pub const LOG_DIR_ENV: &str = "WORKBENCH_LOG_DIR";

const LOG_FILE_PREFIX: &str = "workbench.log";
const DEFAULT_FILTER: &str = "workbench=info,warn";

/// Where and how much to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub directory: PathBuf,
    pub filter: String,
}

impl LogConfig {
    /// Read `WORKBENCH_LOG_DIR` and `WORKBENCH_LOG`, falling back to
    /// `<local data dir>/workbench/logs` and `workbench=info,warn`
    pub fn from_env() -> Self {
        let directory = std::env::var_os(LOG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_log_directory);
        let filter = std::env::var(LOG_FILTER_ENV).unwrap_or_else(|_| DEFAULT_FILTER.to_string());
        Self { directory, filter }
    }

    /// Path of the file written today (the appender adds a date suffix)
    pub fn log_file(&self) -> PathBuf {
        self.directory.join(LOG_FILE_PREFIX)
    }
}

/// Initialize the logging subsystem from the environment
///
/// # Examples
/// ```bash
/// WORKBENCH_LOG=debug workbench
/// WORKBENCH_LOG=workbench_app=trace WORKBENCH_LOG_DIR=/tmp/wb workbench --headless
/// ```
pub fn init() -> Result<()> {
    init_with(&LogConfig::from_env())
}

/// Initialize the logging subsystem with an explicit configuration
pub fn init_with(config: &LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.directory)?;

    let env_filter = EnvFilter::try_new(&config.filter).map_err(|e| {
        Error::config(format!("Invalid {} filter '{}': {}", LOG_FILTER_ENV, config.filter, e))
    })?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.directory, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::config(format!("Logging already initialized: {}", e)))?;

    log_banner(&config.directory);
    Ok(())
}

fn log_banner(directory: &Path) {
    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Workbench {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", directory.display());
    tracing::info!("═══════════════════════════════════════════════════════");
}

fn default_log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("workbench")
        .join("logs")
}

//! # workbench-core - Core Domain Types
//!
//! Foundation crate for Workbench. Provides domain types, error handling,
//! logging setup and the markup preview renderer.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, toml, tracing, tracing-subscriber,
//! tracing-appender, dirs).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`PanelId`], [`PanelKind`] - Panel identity and role
//! - [`ViewMode`] - Source vs. rendered preview
//! - [`Author`], [`MessagePhase`], [`MessageId`], [`ExchangeId`] - Chat log vocabulary
//! - [`AppPhase`] - Shell lifecycle phase
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum; [`Error::is_fatal`] marks errors that end the shell
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Logging (`logging`)
//! - [`logging::init()`] - File logging configured from `WORKBENCH_LOG`
//! - [`logging::LogConfig`] - Log directory and filter
//!
//! ### Preview (`preview`)
//! - [`render_preview()`] - Render buffer markup into styled text lines
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use workbench_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod preview;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use preview::{decode_entities, render_preview, PreviewLine, PreviewLineKind};
pub use types::{AppPhase, Author, ExchangeId, MessageId, MessagePhase, PanelId, PanelKind, ViewMode};

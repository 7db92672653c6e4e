//! Headless mode - prompts on stdin, JSON events on stdout
//!
//! Runs the same engine as the terminal shell without drawing anything.
//! Every stdin line is either a command (prefixed with `:`) or a prompt for
//! the assistant; prompts queue up and are submitted one at a time, as the
//! chat only accepts a new prompt once the previous reply has resolved.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//!
//! ```json
//! {"event":"ready","preset":"app-builder","panels":3,"timestamp":1704700001000}
//! {"event":"prompt_submitted","exchange":1,"prompt":"build a form","timestamp":1704700002000}
//! {"event":"reply_completed","exchange":1,"text":"I can help you with the Home page. ...","timestamp":1704700002500}
//! ```

pub mod runner;

pub use runner::run_headless;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;
use workbench_app::message::Message;
use workbench_app::EngineEvent;
use workbench_core::{ExchangeId, ViewMode};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The shell is mounted and reading stdin
    Ready {
        preset: String,
        panels: usize,
        timestamp: i64,
    },

    PromptSubmitted {
        exchange: ExchangeId,
        prompt: String,
        timestamp: i64,
    },

    ReplyRetried { exchange: ExchangeId, timestamp: i64 },

    ReplyCompleted {
        exchange: ExchangeId,
        text: String,
        timestamp: i64,
    },

    ReplyFailed {
        exchange: ExchangeId,
        reason: String,
        timestamp: i64,
    },

    ViewModeChanged { mode: ViewMode, timestamp: i64 },

    /// A stdin line that could not be handled
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn ready(preset: &str, panels: usize) -> Self {
        Self::Ready {
            preset: preset.to_string(),
            panels,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Headless view of an engine event; panel and lifecycle events are
    /// not reported
    pub fn from_engine(event: &EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        let converted = match event {
            EngineEvent::PromptSubmitted {
                exchange, prompt, ..
            } => Self::PromptSubmitted {
                exchange: *exchange,
                prompt: prompt.clone(),
                timestamp,
            },
            EngineEvent::ReplyRetried { exchange, .. } => Self::ReplyRetried {
                exchange: *exchange,
                timestamp,
            },
            EngineEvent::ReplyCompleted { exchange, text, .. } => Self::ReplyCompleted {
                exchange: *exchange,
                text: text.clone(),
                timestamp,
            },
            EngineEvent::ReplyFailed {
                exchange, reason, ..
            } => Self::ReplyFailed {
                exchange: *exchange,
                reason: reason.clone(),
                timestamp,
            },
            EngineEvent::ViewModeChanged { new_mode, .. } => Self::ViewModeChanged {
                mode: *new_mode,
                timestamp,
            },
            EngineEvent::PanelsChanged { .. } | EngineEvent::Shutdown => return None,
        };
        Some(converted)
    }
}

/// One parsed stdin line
#[derive(Debug, Clone)]
pub enum HeadlessCommand {
    /// Queue a prompt for the assistant
    Prompt(String),
    /// Forward a message to the engine immediately
    Engine(Message),
    Quit,
}

/// Parse a stdin line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Option<std::result::Result<HeadlessCommand, String>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(command) = line.strip_prefix(':') else {
        return Some(Ok(HeadlessCommand::Prompt(line.to_string())));
    };

    let parsed = match command.trim() {
        "q" | "quit" => Ok(HeadlessCommand::Quit),
        "retry" => Ok(HeadlessCommand::Engine(Message::RetryExchange)),
        "preview" => Ok(HeadlessCommand::Engine(Message::SetViewMode(ViewMode::Preview))),
        "source" => Ok(HeadlessCommand::Engine(Message::SetViewMode(ViewMode::Source))),
        "next-page" => Ok(HeadlessCommand::Engine(Message::NextPage)),
        other => Err(format!("Unknown command: :{}", other)),
    };
    Some(parsed)
}

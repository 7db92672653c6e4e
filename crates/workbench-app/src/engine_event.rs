//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner serializes them as JSON lines;
//! a real assistant backend or another front end can listen the same way.

use serde::Serialize;
use workbench_core::{ExchangeId, MessageId, PanelId, PanelKind, ViewMode};

/// Size and visibility of one panel at the time of an event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSnapshot {
    pub id: PanelId,
    pub kind: PanelKind,
    pub size_fraction: f64,
    pub collapsed: bool,
}

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Assistant Exchange
    // ─────────────────────────────────────────────────────────
    /// A prompt was accepted and a reply placeholder appended
    PromptSubmitted {
        exchange: ExchangeId,
        placeholder: MessageId,
        prompt: String,
    },

    /// A failed exchange was re-issued in place
    ReplyRetried {
        exchange: ExchangeId,
        placeholder: MessageId,
    },

    /// The placeholder now holds the final reply
    ReplyCompleted {
        exchange: ExchangeId,
        placeholder: MessageId,
        text: String,
    },

    /// The provider failed; the placeholder holds the reason
    ReplyFailed {
        exchange: ExchangeId,
        placeholder: MessageId,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────
    // Workspace
    // ─────────────────────────────────────────────────────────
    /// The content pane switched representation
    ViewModeChanged { old_mode: ViewMode, new_mode: ViewMode },

    /// A panel was resized, collapsed or expanded
    PanelsChanged { panels: Vec<PanelSnapshot> },

    // ─────────────────────────────────────────────────────────
    // Engine Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PromptSubmitted { .. } => "prompt_submitted",
            Self::ReplyRetried { .. } => "reply_retried",
            Self::ReplyCompleted { .. } => "reply_completed",
            Self::ReplyFailed { .. } => "reply_failed",
            Self::ViewModeChanged { .. } => "view_mode_changed",
            Self::PanelsChanged { .. } => "panels_changed",
            Self::Shutdown => "shutdown",
        }
    }

    /// Whether this event ends an exchange
    pub fn is_reply_outcome(&self) -> bool {
        matches!(self, Self::ReplyCompleted { .. } | Self::ReplyFailed { .. })
    }
}

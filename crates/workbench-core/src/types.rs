//! Core domain type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Shell is mounted and processing events
    #[default]
    Running,
    /// Shell is tearing down
    Quitting,
}

// ─────────────────────────────────────────────────────────────────
// Panels
// ─────────────────────────────────────────────────────────────────

/// Identifier of a panel within the workspace layout.
///
/// Ids are assigned in layout order when the shell mounts and stay
/// stable for the lifetime of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PanelId(pub usize);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel#{}", self.0)
    }
}

/// What a panel hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    /// Project configuration and component palette
    Config,
    /// Code editor / live preview pane
    Content,
    /// Assistant chat log and prompt input
    Assistant,
}

impl PanelKind {
    /// Default title shown in the panel border
    pub fn default_label(&self) -> &'static str {
        match self {
            PanelKind::Config => "Configuration",
            PanelKind::Content => "Editor",
            PanelKind::Assistant => "AI Assistant",
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// View Mode
// ─────────────────────────────────────────────────────────────────

/// Representation shown by the content pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Editable source text
    #[default]
    Source,
    /// Rendered preview derived from the source text
    Preview,
}

impl ViewMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Source => ViewMode::Preview,
            ViewMode::Preview => ViewMode::Source,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Source => "Code",
            ViewMode::Preview => "Preview",
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────────────

/// Unique, strictly increasing chat message id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageId(pub u64);

/// Identifier of one submit/reply round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExchangeId(pub u64);

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exchange#{}", self.0)
    }
}

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    User,
    Assistant,
}

impl Author {
    pub fn label(&self) -> &'static str {
        match self {
            Author::User => "You",
            Author::Assistant => "Assistant",
        }
    }
}

/// Lifecycle of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessagePhase {
    /// Placeholder awaiting the assistant's reply
    Pending,
    /// Final text is in place
    Complete,
    /// The provider failed; text holds the failure reason
    Failed,
}

impl MessagePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, MessagePhase::Complete | MessagePhase::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_defaults_to_source() {
        assert_eq!(ViewMode::default(), ViewMode::Source);
    }

    #[test]
    fn test_view_mode_toggled_round_trips() {
        assert_eq!(ViewMode::Source.toggled(), ViewMode::Preview);
        assert_eq!(ViewMode::Source.toggled().toggled(), ViewMode::Source);
    }

    #[test]
    fn test_panel_kind_serde_snake_case() {
        let kind: PanelKind = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(kind, PanelKind::Assistant);
        assert_eq!(serde_json::to_string(&PanelKind::Config).unwrap(), "\"config\"");
    }

    #[test]
    fn test_message_phase_terminal() {
        assert!(!MessagePhase::Pending.is_terminal());
        assert!(MessagePhase::Complete.is_terminal());
        assert!(MessagePhase::Failed.is_terminal());
    }

    #[test]
    fn test_ids_order_by_value() {
        assert!(MessageId(1) < MessageId(2));
        assert_eq!(ExchangeId(7).to_string(), "exchange#7");
        assert_eq!(PanelId(0).to_string(), "panel#0");
    }
}

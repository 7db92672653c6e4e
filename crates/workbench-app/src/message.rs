//! Message types for the application (TEA pattern)

use workbench_core::{ExchangeId, MessageId, PanelId, ViewMode};

use crate::buffer::CursorMove;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick for periodic updates (spinner animation)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Focus & Layout
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,
    FocusPanel(PanelId),

    /// Collapse or expand a panel
    ToggleCollapse(PanelId),
    /// Collapse or expand the focused panel
    ToggleCollapseFocused,

    /// Set a panel's size fraction (clamped)
    SetPanelSize { panel: PanelId, fraction: f64 },
    /// Grow (positive) or shrink (negative) a panel
    ResizePanel { panel: PanelId, delta: f64 },
    /// Resize the focused panel by `resize_step` in the given direction
    ResizeFocused { grow: bool },

    // ─────────────────────────────────────────────────────────
    // Content pane
    // ─────────────────────────────────────────────────────────
    SetViewMode(ViewMode),
    ToggleViewMode,

    BufferInsert(char),
    BufferNewline,
    BufferBackspace,
    BufferDelete,
    BufferCursor(CursorMove),
    /// Restore the buffer's initial text
    ResetBuffer,
    /// Copy the whole buffer to the clipboard
    CopyBuffer,

    /// Scroll the preview by the given number of lines
    ScrollPreview(i16),

    // ─────────────────────────────────────────────────────────
    // Assistant
    // ─────────────────────────────────────────────────────────
    ChatInput(char),
    ChatBackspace,
    ClearChatInput,
    /// Submit the typed prompt
    SubmitPrompt,
    /// Submit text directly (headless mode, tests)
    SubmitText(String),
    /// Re-issue the last failed exchange
    RetryExchange,
    /// Scroll the chat log (positive = towards older messages)
    ScrollChat(i16),

    /// The provider produced a reply
    AssistantReplied {
        exchange: ExchangeId,
        placeholder: MessageId,
        text: String,
    },
    /// The provider failed or timed out
    AssistantFailed {
        exchange: ExchangeId,
        placeholder: MessageId,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────
    // Configuration panel
    // ─────────────────────────────────────────────────────────
    NextPage,
    PreviousPage,
    SelectPage(usize),
    SwitchConfigTab,
    CycleFramework,
    PaletteNext,
    PalettePrevious,
    AddSelectedComponent,
}

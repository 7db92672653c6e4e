//! workbench-app - Application state and orchestration for Workbench
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the panel layout manager, the content buffer behind the
//! source/preview toggle, the assistant exchange simulator, the Engine that
//! both front ends drive, and configuration loading.

pub mod actions;
pub mod assistant;
pub mod buffer;
pub mod chat;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod layout;
pub mod message;
pub mod process;
pub mod project;
pub mod signals;
pub mod state;

// Re-export primary types
pub use assistant::{
    AssistantRequest, LocalResponseProvider, ReplyContext, ResponseProvider, SimulatedAssistant,
};
pub use buffer::{ContentBuffer, CursorMove};
pub use chat::{ChatLog, ChatMessage, ExchangePhase, PendingReply};
pub use engine::Engine;
pub use engine_event::{EngineEvent, PanelSnapshot};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use layout::{PanelLayout, PanelState};
pub use message::Message;
pub use project::{ConfigTab, ProjectState};
pub use state::AppState;

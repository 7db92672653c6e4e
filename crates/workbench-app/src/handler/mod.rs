//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focused panel
//! - `layout`: Focus, resize and collapse handlers
//! - `editor`: Content buffer and view mode handlers
//! - `chat`: Assistant exchange handlers
//! - `project`: Configuration panel handlers

pub(crate) mod chat;
pub(crate) mod editor;
pub(crate) mod keys;
pub(crate) mod layout;
pub(crate) mod project;
pub(crate) mod update;


use crate::assistant::AssistantRequest;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Ask the response provider for a reply in a background task
    RequestReply(AssistantRequest),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

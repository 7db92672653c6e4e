//! Assistant exchange handlers

use workbench_core::prelude::*;
use workbench_core::{ExchangeId, MessageId};

use crate::assistant::AssistantRequest;
use crate::chat::PendingReply;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Submit whatever is typed in the prompt line
pub fn handle_submit_prompt(state: &mut AppState) -> UpdateResult {
    let text = state.chat_input.clone();
    let result = handle_submit(state, &text);
    if result.action.is_some() {
        state.chat_input.clear();
    }
    result
}

pub fn handle_submit(state: &mut AppState, text: &str) -> UpdateResult {
    match state.chat.submit(text) {
        Some(pending) => {
            info!("Prompt submitted as {}", pending.exchange);
            state.chat_scroll = 0;
            request_reply(state, pending)
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_retry(state: &mut AppState) -> UpdateResult {
    match state.chat.retry() {
        Some(pending) => {
            state.chat_scroll = 0;
            request_reply(state, pending)
        }
        None => UpdateResult::none(),
    }
}

fn request_reply(state: &AppState, pending: PendingReply) -> UpdateResult {
    UpdateResult::action(UpdateAction::RequestReply(AssistantRequest {
        exchange: pending.exchange,
        placeholder: pending.placeholder,
        prompt: pending.prompt,
        context: state.reply_context(),
    }))
}

pub fn handle_replied(
    state: &mut AppState,
    exchange: ExchangeId,
    placeholder: MessageId,
    text: String,
) -> UpdateResult {
    if state.chat.complete(exchange, placeholder, text) {
        debug!("{} completed", exchange);
    }
    UpdateResult::none()
}

pub fn handle_failed(
    state: &mut AppState,
    exchange: ExchangeId,
    placeholder: MessageId,
    reason: String,
) -> UpdateResult {
    if state.chat.fail(exchange, placeholder, reason) {
        warn!("{} failed", exchange);
    }
    UpdateResult::none()
}

pub fn handle_scroll(state: &mut AppState, delta: i16) -> UpdateResult {
    state.chat_scroll = state.chat_scroll.saturating_add_signed(delta);
    UpdateResult::none()
}

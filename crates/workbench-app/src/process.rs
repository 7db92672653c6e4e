//! Message processing through the TEA update loop

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::actions::{handle_action, ReplyTaskMap};
use crate::assistant::ResponseProvider;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function, following up on any
/// chained messages and dispatching actions as they appear
pub fn process_message<P>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    provider: &Arc<P>,
    reply_tasks: &ReplyTaskMap,
    shutdown_rx: &watch::Receiver<bool>,
) where
    P: ResponseProvider + Sync + 'static,
{
    let timeout = match state.settings.assistant.timeout_ms {
        0 => None,
        ms => Some(Duration::from_millis(ms)),
    };

    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(
                action,
                msg_tx.clone(),
                provider.clone(),
                reply_tasks.clone(),
                shutdown_rx.clone(),
                timeout,
            );
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

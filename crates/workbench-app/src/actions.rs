//! Action handlers: UpdateAction dispatch and background task spawning

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use workbench_core::prelude::*;
use workbench_core::ExchangeId;

use crate::assistant::{AssistantRequest, ResponseProvider};
use crate::message::Message;
use crate::UpdateAction;

/// In-flight reply tasks, keyed by exchange
pub type ReplyTaskMap = Arc<std::sync::Mutex<HashMap<ExchangeId, tokio::task::JoinHandle<()>>>>;

/// Execute an action by spawning a background task
pub fn handle_action<P>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    provider: Arc<P>,
    reply_tasks: ReplyTaskMap,
    shutdown_rx: watch::Receiver<bool>,
    timeout: Option<Duration>,
) where
    P: ResponseProvider + Sync + 'static,
{
    match action {
        UpdateAction::RequestReply(request) => {
            spawn_reply(request, msg_tx, provider, reply_tasks, shutdown_rx, timeout);
        }
    }
}

/// Ask the provider for a reply and post the outcome back to the TEA loop.
///
/// The task stops without posting anything when the shutdown signal fires
/// first; the engine additionally aborts it through its `JoinHandle`.
fn spawn_reply<P>(
    request: AssistantRequest,
    msg_tx: mpsc::Sender<Message>,
    provider: Arc<P>,
    reply_tasks: ReplyTaskMap,
    shutdown_rx: watch::Receiver<bool>,
    timeout: Option<Duration>,
) where
    P: ResponseProvider + Sync + 'static,
{
    let exchange = request.exchange;
    let tasks = reply_tasks.clone();
    let mut shutdown_rx = shutdown_rx;

    // Held until the handle is stored, so the task cannot remove its entry first
    let mut tracked = reply_tasks.lock();

    let handle = tokio::spawn(async move {
        if *shutdown_rx.borrow() {
            debug!("Not requesting {} after shutdown", exchange);
            return;
        }

        let outcome = tokio::select! {
            result = request_reply(provider.as_ref(), &request, timeout) => Some(result),
            _ = shutdown_rx.changed() => None,
        };

        let message = match outcome {
            Some(Ok(text)) => Some(Message::AssistantReplied {
                exchange,
                placeholder: request.placeholder,
                text,
            }),
            Some(Err(e)) => {
                warn!("Provider failed for {}: {}", exchange, e);
                Some(Message::AssistantFailed {
                    exchange,
                    placeholder: request.placeholder,
                    reason: e.to_string(),
                })
            }
            None => {
                info!("Shutdown signal received, dropping {}", exchange);
                None
            }
        };

        if let Some(message) = message {
            let delivered = msg_tx
                .send(message)
                .await
                .map_err(|_| Error::channel_send(format!("outcome of {}", exchange)));
            if let Err(e) = delivered {
                debug!("{} after the engine detached", e);
            }
        }

        if let Ok(mut guard) = tasks.lock() {
            guard.remove(&exchange);
        } else {
            warn!("{} task could not be removed from tracking (poisoned lock)", exchange);
        }
    });

    match &mut tracked {
        Ok(guard) => {
            guard.insert(exchange, handle);
            debug!("{} task added to tracking (total: {})", exchange, guard.len());
        }
        Err(e) => {
            warn!("Could not track {} task (poisoned lock): {}", exchange, e);
        }
    }
}

async fn request_reply<P>(
    provider: &P,
    request: &AssistantRequest,
    timeout: Option<Duration>,
) -> Result<String>
where
    P: ResponseProvider + Sync,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, provider.respond(request))
            .await
            .map_err(|_| Error::ProviderTimeout {
                after_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
            })?,
        None => provider.respond(request).await,
    }
}

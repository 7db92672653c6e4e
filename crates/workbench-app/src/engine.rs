//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the reply task map,
//! the shutdown signal and the response provider. Both front ends feed it
//! messages and read state back; neither touches the channels directly.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, watch};
use workbench_core::prelude::*;
use workbench_core::{AppPhase, MessagePhase, ViewMode};

use crate::actions::ReplyTaskMap;
use crate::assistant::{ResponseProvider, SimulatedAssistant};
use crate::chat::PendingReply;
use crate::config::Settings;
use crate::engine_event::{EngineEvent, PanelSnapshot};
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// How long shutdown waits for an aborted reply task to wind down
const TASK_CLEANUP_TIMEOUT: Duration = Duration::from_secs(2);

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    phase: AppPhase,
    view_mode: ViewMode,
    pending: Option<PendingReply>,
    message_count: usize,
    panels: Vec<PanelSnapshot>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            phase: state.phase,
            view_mode: state.view_mode,
            pending: state.chat.pending().cloned(),
            message_count: state.chat.len(),
            panels: state
                .layout
                .panels()
                .iter()
                .map(|p| PanelSnapshot {
                    id: p.id,
                    kind: p.kind,
                    size_fraction: p.size_fraction,
                    collapsed: p.collapsed,
                })
                .collect(),
        }
    }
}

/// Orchestration engine for the workspace shell.
///
/// Generic over the response provider so tests and future backends can
/// replace the simulated assistant.
pub struct Engine<P = SimulatedAssistant> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// In-flight reply tasks
    pub reply_tasks: ReplyTaskMap,

    /// Sender for the shutdown signal. Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    provider: Arc<P>,

    /// Cleared by `shutdown`; messages arriving afterwards are dropped
    mounted: bool,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine<SimulatedAssistant> {
    /// Create an engine backed by the simulated assistant configured in
    /// `settings.assistant`.
    pub fn new(settings: Settings) -> Self {
        let provider = SimulatedAssistant::from_settings(&settings.assistant);
        Self::with_provider(settings, provider)
    }
}

impl<P> Engine<P>
where
    P: ResponseProvider + Sync + 'static,
{
    /// Create an engine with a custom response provider.
    ///
    /// - Creates AppState from settings
    /// - Creates message channel (capacity 256)
    /// - Creates shutdown signal channel
    /// - Spawns signal handler
    pub fn with_provider(settings: Settings, provider: P) -> Self {
        let state = AppState::new(settings);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let reply_tasks: ReplyTaskMap = Arc::new(std::sync::Mutex::new(HashMap::new()));

        // Detached; exits on its own once shutdown is flagged
        let _ = signals::spawn_signal_handler(msg_tx.clone(), shutdown_rx.clone());

        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            reply_tasks,
            shutdown_tx,
            shutdown_rx,
            provider: Arc::new(provider),
            mounted: true,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Does nothing once the engine has been shut down.
    pub fn process_message(&mut self, msg: Message) {
        if !self.mounted {
            debug!("Dropping {:?} after unmount", msg);
            return;
        }

        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.provider,
            &self.reply_tasks,
            &self.shutdown_rx,
        );

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
        self.prune_finished_tasks();
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of reply tasks still tracked
    pub fn pending_task_count(&self) -> usize {
        self.reply_tasks.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// Unmount: cancel every pending reply and stop accepting messages.
    ///
    /// Aborted tasks never post their completion, and anything already
    /// queued in the channel is discarded, so state is frozen from here on.
    pub async fn shutdown(&mut self) {
        if !self.mounted {
            return;
        }
        self.emit(EngineEvent::Shutdown);
        self.mounted = false;

        let _ = self.shutdown_tx.send(true);

        let tasks: Vec<_> = match self.reply_tasks.lock() {
            Ok(mut map) => map.drain().collect(),
            Err(e) => {
                warn!("Reply task map poisoned during shutdown: {}", e);
                Vec::new()
            }
        };

        for (exchange, handle) in tasks {
            handle.abort();
            match tokio::time::timeout(TASK_CLEANUP_TIMEOUT, handle).await {
                Ok(Ok(())) => debug!("{} task finished", exchange),
                Ok(Err(e)) if e.is_cancelled() => debug!("{} task cancelled", exchange),
                Ok(Err(e)) => warn!("{} task panicked: {}", exchange, e),
                Err(_) => warn!("{} task cleanup timed out", exchange),
            }
        }

        let mut dropped = 0;
        while self.msg_rx.try_recv().is_ok() {
            dropped += 1;
        }
        info!("Engine unmounted ({} queued messages dropped)", dropped);
    }

    fn prune_finished_tasks(&self) {
        if let Ok(mut map) = self.reply_tasks.lock() {
            map.retain(|_, handle| !handle.is_finished());
        }
    }

    /// Emit EngineEvents based on state changes after processing.
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        // Exchange resolved
        if let Some(old) = &pre.pending {
            if post.pending.as_ref() != Some(old) {
                if let Some(message) = self.state.chat.get(old.placeholder) {
                    match message.phase {
                        MessagePhase::Complete => self.emit(EngineEvent::ReplyCompleted {
                            exchange: old.exchange,
                            placeholder: old.placeholder,
                            text: message.text.clone(),
                        }),
                        MessagePhase::Failed => self.emit(EngineEvent::ReplyFailed {
                            exchange: old.exchange,
                            placeholder: old.placeholder,
                            reason: message.text.clone(),
                        }),
                        MessagePhase::Pending => {}
                    }
                }
            }
        }

        // Exchange started
        if let Some(new) = &post.pending {
            if pre.pending.as_ref() != Some(new) {
                if post.message_count > pre.message_count {
                    self.emit(EngineEvent::PromptSubmitted {
                        exchange: new.exchange,
                        placeholder: new.placeholder,
                        prompt: new.prompt.clone(),
                    });
                } else {
                    self.emit(EngineEvent::ReplyRetried {
                        exchange: new.exchange,
                        placeholder: new.placeholder,
                    });
                }
            }
        }

        if pre.view_mode != post.view_mode {
            self.emit(EngineEvent::ViewModeChanged {
                old_mode: pre.view_mode,
                new_mode: post.view_mode,
            });
        }

        if pre.panels != post.panels {
            self.emit(EngineEvent::PanelsChanged {
                panels: post.panels.clone(),
            });
        }

        if pre.phase != post.phase {
            debug!("Phase {:?} -> {:?}", pre.phase, post.phase);
        }
    }

    /// send() returns Err only if there are no receivers, which is fine.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}

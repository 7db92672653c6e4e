//! Headless mode runner - main event loop without TUI

use std::collections::VecDeque;

use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

use workbench_app::assistant::ResponseProvider;
use workbench_app::config::Settings;
use workbench_app::message::Message;
use workbench_app::{Engine, EngineEvent};
use workbench_core::prelude::*;

use super::{parse_line, HeadlessCommand, HeadlessEvent};

/// Run in headless mode - read prompts from stdin, write JSON events
pub async fn run_headless(settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Workbench starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings);

    let (line_tx, line_rx) = mpsc::channel::<String>(64);
    std::thread::spawn(move || {
        read_stdin_blocking(line_tx);
    });

    let result = run_session(&mut engine, line_rx, |event| event.emit()).await;
    if let Err(e) = &result {
        HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
    }

    engine.shutdown().await;

    info!("Workbench headless mode exiting");
    result
}

/// What woke the loop up
enum Wakeup {
    Line(Option<String>),
    Message(Option<Message>),
}

/// Drive `engine` from a stream of input lines until the input closes and
/// every queued prompt has been answered, or a quit is requested.
///
/// Events go to `sink` instead of stdout so callers can capture them.
pub async fn run_session<P, F>(
    engine: &mut Engine<P>,
    mut lines: mpsc::Receiver<String>,
    mut sink: F,
) -> Result<()>
where
    P: ResponseProvider + Sync + 'static,
    F: FnMut(HeadlessEvent),
{
    let mut events = engine.subscribe();
    let mut queue: VecDeque<String> = VecDeque::new();
    let mut input_open = true;

    sink(HeadlessEvent::ready(
        engine.state.settings.layout.preset.name(),
        engine.state.layout.len(),
    ));

    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        // One prompt at a time: the next goes in once the chat is idle again
        if engine.state.chat.is_idle() {
            if let Some(prompt) = queue.pop_front() {
                engine.process_message(Message::SubmitText(prompt));
                forward_events(&mut events, &mut sink);
                continue;
            }
            if !input_open {
                info!("Input closed and no replies pending");
                break;
            }
        }

        let wakeup = tokio::select! {
            line = lines.recv(), if input_open => Wakeup::Line(line),
            msg = engine.msg_rx.recv() => Wakeup::Message(msg),
        };

        match wakeup {
            Wakeup::Line(None) => input_open = false,
            Wakeup::Line(Some(line)) => match parse_line(&line) {
                None => {}
                Some(Ok(HeadlessCommand::Prompt(prompt))) => queue.push_back(prompt),
                Some(Ok(HeadlessCommand::Engine(msg))) => engine.process_message(msg),
                Some(Ok(HeadlessCommand::Quit)) => engine.process_message(Message::Quit),
                Some(Err(reason)) => {
                    warn!("{}", reason);
                    sink(HeadlessEvent::error(reason, false));
                }
            },
            Wakeup::Message(Some(msg)) => engine.process_message(msg),
            Wakeup::Message(None) => {
                error!("Message channel closed while the session was running");
                return Err(Error::ChannelClosed);
            }
        }

        forward_events(&mut events, &mut sink);
    }

    Ok(())
}

fn forward_events<F: FnMut(HeadlessEvent)>(
    events: &mut broadcast::Receiver<EngineEvent>,
    sink: &mut F,
) {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(converted) = HeadlessEvent::from_engine(&event) {
                    sink(converted);
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output lagged, {} events dropped", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Forward stdin lines to the session loop (blocking, runs on its own thread)
fn read_stdin_blocking(line_tx: mpsc::Sender<String>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => {
                if line_tx.blocking_send(line).is_err() {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}

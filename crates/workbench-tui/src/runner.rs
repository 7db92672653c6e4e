//! Main TUI runner - entry point and event loop

use ratatui::DefaultTerminal;
use workbench_app::config::Settings;
use workbench_app::Engine;
use workbench_core::prelude::*;

use super::{event, render, terminal};

/// Mount the workspace shell in the terminal and run until quit
pub async fn run(settings: Settings) -> Result<()> {
    info!(
        "Mounting shell: preset={}, reply_delay={}ms",
        settings.layout.preset, settings.assistant.reply_delay_ms
    );

    let mut engine = Engine::new(settings);
    let mut term = match terminal::init() {
        Ok(term) => term,
        Err(e) => {
            engine.shutdown().await;
            return Err(e);
        }
    };

    let result = run_loop(&mut term, &mut engine);
    if let Err(e) = &result {
        error!("Event loop failed: {}", e);
    }

    // Cancel pending replies before the terminal goes away
    engine.shutdown().await;
    terminal::restore();

    result
}

/// Main event loop: drain queued messages, draw, then poll input
fn run_loop(terminal: &mut DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Replies and signals arrive through the engine's channel
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        if let Some(text) = engine.state.take_clipboard() {
            if let Err(e) = terminal::copy_to_clipboard(&text) {
                warn!("{}", e);
            }
        }

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}

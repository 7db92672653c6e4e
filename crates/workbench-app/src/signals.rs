//! OS signal handling for graceful shutdown
//!
//! SIGINT/SIGTERM (Ctrl+C on Windows) become a [`Message::Quit`] so the
//! normal unmount path runs and pending replies are cancelled. The listener
//! itself stops once the engine has unmounted.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use workbench_core::prelude::*;

use crate::message::Message;

/// Spawn a task that turns the first termination signal into `Message::Quit`
pub fn spawn_signal_handler(
    tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            result = wait_for_signal() => match result {
                Ok(()) => {
                    info!("Shutdown signal received");
                    let _ = tx.send(Message::Quit).await;
                }
                Err(e) => error!("Signal handler error: {}", e),
            },
            // The watch guard must not outlive the branch future
            _ = async {
                let _ = shutdown_rx.wait_for(|unmounted| *unmounted).await;
            } => {
                debug!("Signal handler stopping after unmount");
            }
        }
    })
}

/// Wait for a termination signal
async fn wait_for_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

        tokio::select! {
            _ = sigint.recv() => info!("Received SIGINT"),
            _ = sigterm.recv() => info!("Received SIGTERM"),
        }
        Ok(())
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        info!("Received Ctrl+C");
        Ok(())
    }
}

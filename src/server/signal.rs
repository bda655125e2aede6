//! Shutdown signals
//!
//! SIGINT and SIGTERM stop the accept loop. Connections already being
//! served run until they finish or time out.

use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Wait for a shutdown signal in the background and notify `shutdown`.
#[cfg(unix)]
pub fn start_signal_handler(shutdown: Arc<Notify>) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::spawn(async move {
        let reason = tokio::select! {
            _ = sigterm.recv() => "SIGTERM received",
            _ = sigint.recv() => "SIGINT received",
        };
        logger::log_shutdown(reason);
        // notify_one stores a permit if the loop is between polls
        shutdown.notify_one();
    });
    Ok(())
}

/// Only Ctrl+C is available off Unix
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: Arc<Notify>) -> std::io::Result<()> {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            logger::log_shutdown("Ctrl+C received");
            shutdown.notify_one();
        }
    });
    Ok(())
}

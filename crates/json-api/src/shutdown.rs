//! Graceful shutdown on SIGINT or SIGTERM.

use std::{io, time::Duration};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

/// Longest wait for in-flight requests once a signal arrives.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
#[error("failed to install {signal} handler: {source}")]
pub(crate) struct ShutdownSignalError {
    signal: &'static str,
    #[source]
    source: io::Error,
}

impl ShutdownSignalError {
    fn new(signal: &'static str) -> impl FnOnce(io::Error) -> Self {
        move |source| Self { signal, source }
    }
}

/// Waits for a stop signal, then lets the server drain.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let signal = wait_for_signal().await?;

    info!(signal, "shutdown signal received, draining connections");

    handle.stop_graceful(Some(DRAIN_TIMEOUT));

    Ok(())
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<&'static str, ShutdownSignalError> {
    use signal::unix::{SignalKind, signal as unix_signal};

    let mut terminate =
        unix_signal(SignalKind::terminate()).map_err(ShutdownSignalError::new("SIGTERM"))?;

    tokio::select! {
        result = signal::ctrl_c() => {
            result.map_err(ShutdownSignalError::new("SIGINT"))?;

            Ok("SIGINT")
        }
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Result<&'static str, ShutdownSignalError> {
    signal::ctrl_c()
        .await
        .map_err(ShutdownSignalError::new("Ctrl+C"))?;

    Ok("Ctrl+C")
}

//! Logging, metrics and request tracing.

use thiserror::Error;

mod init;
mod metrics;
mod request;

pub(crate) use init::init;
pub(crate) use metrics::metrics_handler;
pub(crate) use request::request_logging;

#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    #[error("failed to install tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}

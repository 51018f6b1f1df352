//! Observability lifecycle.

use std::{sync::OnceLock, time::Duration};

use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, ServerConfig, observability::ObservabilityConfig};

use super::ObservabilityError;

const DEFAULT_SLOW_REQUEST_THRESHOLD: Duration = Duration::from_secs(1);

static SLOW_REQUEST_THRESHOLD: OnceLock<Duration> = OnceLock::new();

/// Install the log subscriber and record the slow request threshold.
pub(crate) fn init(config: &ServerConfig) -> Result<(), ObservabilityError> {
    let observability = &config.observability;

    _ = SLOW_REQUEST_THRESHOLD.set(observability.slow_request_threshold());

    match observability.log_format {
        LogFormat::Compact => install(
            observability,
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_line_number(true),
        ),
        LogFormat::Json => install(
            observability,
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_target(true),
        ),
    }
}

/// Requests taking longer are logged as slow.
pub(super) fn slow_request_threshold() -> Duration {
    SLOW_REQUEST_THRESHOLD
        .get()
        .copied()
        .unwrap_or(DEFAULT_SLOW_REQUEST_THRESHOLD)
}

fn install<L>(config: &ObservabilityConfig, fmt_layer: L) -> Result<(), ObservabilityError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_invalid| EnvFilter::new(config.filter_directives()));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()?;

    Ok(())
}

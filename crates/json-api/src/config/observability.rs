//! Logging & Request Observability Config

use std::time::Duration;

use clap::Args;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Single-line human-readable logs.
    Compact,

    /// One JSON object per event, with the active span list.
    Json,
}

/// Logging and request observability settings.
#[derive(Debug, Args)]
pub struct ObservabilityConfig {
    /// Default log directive when `RUST_LOG` holds no valid filter
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Requests slower than this are logged as warnings
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000_u64)]
    pub slow_request_threshold_ms: u64,
}

impl ObservabilityConfig {
    /// Filter directives: the configured level, with noisy transport and
    /// driver crates held at `warn`.
    #[must_use]
    pub fn filter_directives(&self) -> String {
        format!("{},h2=warn,hyper=warn,sqlx=warn", self.log_level)
    }

    #[must_use]
    pub fn slow_request_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_request_threshold_ms)
    }
}

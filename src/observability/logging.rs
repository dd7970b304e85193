//! Structured logging.
//!
//! Uses the tracing crate with an `EnvFilter`; `RUST_LOG` takes precedence
//! over the configured log level.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Default filter directive for a configured level, e.g. `teaswap_bot=info,teloxide=warn`.
pub fn default_directive(level: &str) -> String {
    format!("teaswap_bot={level},swap_cli={level},teloxide=warn")
}

/// Initialize the global tracing subscriber.
///
/// Returns an error if a subscriber was already installed.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(&config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

//! Logging initialization.
//!
//! Logs go to stderr; stdout carries the converted document.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{CliError, CliResult};

/// Environment variable holding the fallback filter directive.
pub const LOG_ENV: &str = "OAS2FN_LOG";

/// Filter used when neither `RUST_LOG` nor [`LOG_ENV`] is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter: `RUST_LOG` first, then `OAS2FN_LOG`, then [`DEFAULT_FILTER`].
pub fn env_filter() -> CliResult<EnvFilter> {
    let fallback = std::env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback))
        .map_err(|e| CliError::Logging(format!("invalid log filter '{}': {}", fallback, e)))
}

/// Installs the global subscriber.
pub fn init() -> CliResult<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter()?)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

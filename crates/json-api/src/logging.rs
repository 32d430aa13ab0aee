//! Logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::logging::{LogFormat, LoggingConfig};

/// Initialize the global tracing subscriber from config.
pub(crate) fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Compact => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

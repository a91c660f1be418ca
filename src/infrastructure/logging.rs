//! Tracing subscriber setup

use crate::shared::config::LoggingConfig;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    // try_init: a second initialisation (tests, embedding) is not an error
    let _ = match config.format.as_str() {
        "json" => fmt().json().with_env_filter(filter).try_init(),
        _ => fmt().with_env_filter(filter).try_init(),
    };
}

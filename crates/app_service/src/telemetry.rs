//! Tracing setup for the hosting application

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global tracing subscriber with the configured level.
/// Safe to call once per process; returns quietly if a subscriber is
/// already installed (as happens across test binaries).
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    let _ = fmt().with_env_filter(filter).try_init();
}

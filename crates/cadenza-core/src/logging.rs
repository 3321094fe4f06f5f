//! Logging and tracing initialization.
//!
//! cadenza itself only emits `tracing` events: a `trace` event per envelope
//! written and an `error` event right before an encoding failure aborts a
//! response. Call one of these once at startup to see them.
//!
//! The level is controlled by `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=cadenza_core=trace cargo run -p cadenza-server
//! ```

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize plain formatted logging, `info` unless `RUST_LOG` says otherwise.
///
/// # Panics
///
/// If a global subscriber is already installed.
pub fn init_logging() {
    init_logging_with_level("info");
}

/// Initialize plain formatted logging with `level` as the fallback filter.
///
/// # Panics
///
/// If a global subscriber is already installed.
pub fn init_logging_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize pretty-formatted logging (recommended for development).
///
/// # Panics
///
/// If a global subscriber is already installed.
pub fn init_logging_pretty() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_line_number(true)
                .with_target(true),
        )
        .init();
}

/// Initialize JSON-formatted logging (recommended for production).
///
/// # Panics
///
/// If a global subscriber is already installed.
pub fn init_logging_json() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}

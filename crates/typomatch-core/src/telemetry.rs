//! Logging setup for binaries and tests embedding the matcher.
//!
//! The library only emits `tracing` events (`trace` for fast-matcher
//! decisions, `debug` for index rebuilds); installing a subscriber is the
//! caller's choice.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with the `info` default filter.
pub fn init() -> bool {
    init_with_filter("info")
}

/// Initialize tracing with a custom default filter. `RUST_LOG` wins when set,
/// e.g. `RUST_LOG=typomatch_core=trace`.
///
/// Returns false if a global subscriber was already installed.
pub fn init_with_filter(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init()
        .is_ok()
}

//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the embedding application. `init_logging` is a convenience for binaries and
//! tests that want the usual fmt output with an env-driven filter.

use crate::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// The filter is read from `PAGEDROP_LOG`, then `RUST_LOG`, then defaults to
/// `warn`. Returns false if a global subscriber was already installed.
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Install a subscriber that writes through the test harness's captured
/// output. Safe to call from every test.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

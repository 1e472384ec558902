//! Tracing subscriber setup for the `notty` binary.
//!
//! Engine events (game start, every action, rejections, game over) are
//! emitted through `tracing`. The binary writes them to stderr so they never
//! mix with the table display on stdout.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive, e.g. `notty_engine=debug`.
pub const LOG_ENV: &str = "NOTTY_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from `NOTTY_LOG`, falling back to `warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

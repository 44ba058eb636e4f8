//! Tracing setup for tests.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a `tracing` subscriber for the current test binary.
///
/// Events are routed through the test harness writer, so they surface only
/// for failing tests or under `--nocapture`. The filter defaults to `debug`
/// and can be overridden with `RUST_LOG`. Safe to call from every test;
/// after the first call subsequent ones are no-ops.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_does_not_panic() {
        init_test_logging();
        init_test_logging();
    }
}

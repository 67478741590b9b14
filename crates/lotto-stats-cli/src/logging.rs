//! Tracing initialization for the binary.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "LOTTO_LOG";

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "lotto_stats=debug"
    } else {
        "lotto_stats=info"
    }
}

/// Initialize logging to stderr so stdout carries only reports.
///
/// Reads `LOTTO_LOG` (e.g. `LOTTO_LOG=lotto_stats_core::models=debug`), and
/// falls back to `lotto_stats=info`, or `lotto_stats=debug` with `--verbose`.
/// The filter also covers the `lotto_stats_core` targets by prefix.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbose),
            )
            .with(filter)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "lotto_stats=info");
        assert_eq!(default_filter(true), "lotto_stats=debug");
    }

    #[test]
    fn test_init_is_idempotent() {
        init_tracing(false);
        init_tracing(true);
    }
}

//! Common logger configuration for PRiVCY binaries and tests.

use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::{
    filter::Targets,
    layer::{Layer, SubscriberExt},
    util::{SubscriberInitExt, TryInitError},
};

/// Initialize a global `tracing` logger.
///
/// + The logger will print enabled `tracing` events and spans to stderr, so
///   they never mix with a binary's machine-readable stdout.
/// + The default log level includes INFO, WARN, and ERROR events.
/// + You can change the log level or module filtering with an appropriate
///   `RUST_LOG` env var set. Read more about the syntax here:
///   <https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/targets/struct.Targets.html>
///
/// Panics if a logger is already initialized. This will fail if used in tests,
/// since multiple test threads will compete to set the global logger.
pub fn init() {
    try_init().expect("Failed to setup logger");
}

/// Use this to initialize the global logger in tests.
pub fn init_for_testing() {
    // Quickly skip logger setup if no env var set.
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    // Don't panic if there's already a logger setup. Multiple tests might try
    // setting the global logger.
    let _ = try_init();
}

/// Try to initialize a global logger. Will return an `Err` if there is another
/// global logger already set.
pub fn try_init() -> Result<(), TryInitError> {
    let filter = rust_log_filter(std::env::var("RUST_LOG").ok().as_deref());

    let stderr_log = tracing_subscriber::fmt::layer()
        .compact()
        .with_level(true)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_log).try_init()
}

/// Defaults to INFO logs if no `RUST_LOG` env var is set or we can't parse
/// the targets filter.
fn rust_log_filter(rust_log: Option<&str>) -> Targets {
    rust_log
        .and_then(|rust_log| Targets::from_str(rust_log).ok())
        .unwrap_or_else(|| Targets::new().with_default(Level::INFO))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rust_log_filter_defaults_to_info() {
        let filter = rust_log_filter(None);
        assert!(filter.would_enable("payment_uri", &Level::INFO));
        assert!(!filter.would_enable("payment_uri", &Level::DEBUG));
    }

    #[test]
    fn rust_log_filter_parses_targets() {
        let filter = rust_log_filter(Some("info,payment_uri=trace"));
        assert!(filter.would_enable("payment_uri", &Level::TRACE));
        assert!(!filter.would_enable("common", &Level::DEBUG));
        assert!(filter.would_enable("common", &Level::INFO));
    }

    #[test]
    fn init_for_testing_is_idempotent() {
        init_for_testing();
        init_for_testing();
        tracing::info!("logger still works");
    }
}

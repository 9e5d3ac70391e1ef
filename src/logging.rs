//! Diagnostic logging via `tracing` and `tracing-subscriber`.
//!
//! Logs always go to stderr so they never mix with filtered records on
//! stdout. `RUST_LOG` takes precedence over the verbosity chosen on the
//! command line.
//!
//! - `warn`: inputs that could not be opened
//! - `debug`: parsed field list, opened inputs, record counts
//! - `trace`: per-record decisions (never the record contents)

use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Pick the log level from the `--verbose` flag.
pub fn level_for(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

/// Install the global stderr subscriber. Call once, before any filtering.
pub fn init_logging(level: Level) {
    let filter = build_env_filter(level);
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    // A subscriber may already be set (for example by a test harness).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// Other crates stay at `warn`; only this crate follows `level`.
fn default_directives(level: Level) -> String {
    format!("warn,fieldcut={}", level.as_str().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false), Level::WARN);
        assert_eq!(level_for(true), Level::DEBUG);
    }

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(Level::WARN), "warn,fieldcut=warn");
        assert_eq!(default_directives(Level::DEBUG), "warn,fieldcut=debug");
        assert!(EnvFilter::try_new(default_directives(Level::TRACE)).is_ok());
    }
}

//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber, logging to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` (from the
/// `[logging]` config section) applies. Calling this twice is a no-op.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

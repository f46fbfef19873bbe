//! Tracing bootstrap for the hosting process.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Reads `RUST_LOG` and defaults to `info`. Call once at process start;
/// a second call panics, as with any global subscriber installation.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

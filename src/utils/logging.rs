use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the tracing subscriber.
/// - Respects `RUST_LOG` if set, otherwise uses `level`
/// - Writes to stderr so log lines stay out of the result tables
pub fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));
    if let Err(err) = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init()
    {
        // only fails when a global subscriber exists, so this reaches it
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}

use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize structured logging: JSON lines on stderr, level filtered
/// by `RUST_LOG` (default "info"). Stdout is reserved for dashboard
/// output, so logs never interleave with rendered snapshots.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .json()
        .flatten_event(true)
        .init();
}

//! Logging setup shared by the CLI binaries

use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr subscriber (`RUST_LOG` overrides the default filter)
pub fn init_logging() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("textcraft=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

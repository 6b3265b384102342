use tracing_subscriber::EnvFilter;

/// Install the global subscriber: fmt output on stderr, filtered by
/// `RUST_LOG` and defaulting to `warn`, so stdout carries only the report.
///
/// Does nothing if a subscriber is already installed.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

use tracing_subscriber::EnvFilter;

/// Initialize tracing output on stderr. `RUST_LOG` overrides the default
/// level; `verbose` raises it from errors-only to info.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

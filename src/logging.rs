use tracing_subscriber::EnvFilter;

/// Filter for the given config `debug` flag.
///
/// Without `debug` the level is pinned to `info` and `RUST_LOG` is ignored.
fn filter(debug: bool) -> EnvFilter {
    if !debug {
        return EnvFilter::new("info");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
}

/// Install the global subscriber. A second call is a no-op.
pub(crate) fn init(debug: bool) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        let debug_enabled = debug;
        tracing::debug!(debug = debug_enabled, "logging initialised");
    }
}

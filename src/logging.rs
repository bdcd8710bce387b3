use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for embedding hosts without one.
/// Filter from `RUST_LOG`, defaulting to `info`; repeated calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

//! Telemetry helpers for structured logging and tracing.

/// Install an `RUST_LOG`-filtered fmt subscriber unless one is already set.
///
/// Logs go to stderr; stdout is reserved for the run report so it can be
/// piped or appended to a log file untouched.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

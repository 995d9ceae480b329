/// Initializes the tracing/logging infrastructure for SDK consumers.
///
/// Structured logging via the `tracing` crate with environment-based
/// filtering: set `RUST_LOG` to control verbosity, e.g.
/// `RUST_LOG=genoflow_sdk=debug` to trace only SDK calls.
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("session opened");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

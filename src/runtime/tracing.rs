/// Initializes the tracing/logging infrastructure for the application.
///
/// This sets up structured logging using the `tracing` crate with:
/// - **Environment-based filtering**: Controlled via `RUST_LOG`, defaulting to `info`
/// - **Compact formatting**: spans shown inline, module paths hidden
///
/// # Environment Variables
///
/// - `RUST_LOG=info` - Lifecycle events (started, hydrated, removed, shutdown)
/// - `RUST_LOG=debug` - Every request with its payload, every storage flush
/// - `RUST_LOG=marketplace_cart::storage=debug` - Storage only
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

use tracing_subscriber::EnvFilter;

/// Initializes the global `tracing` subscriber.
///
/// `filter` uses `EnvFilter` directive syntax (`info`, `oc_lettings=debug,tower_http=info`).
/// An unparsable directive falls back to `info`. Fails if a global subscriber is
/// already installed.
///
/// ```ignore
/// setup_tracing("info")?;
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing(filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
}

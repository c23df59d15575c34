use anyhow::{anyhow, Context, Result};
use clap::Parser;
use oc_lettings::config::Config;
use oc_lettings::lifecycle::{setup_tracing, SiteSystem};
use oc_lettings::seed::seed_demo_data;
use oc_lettings::web::{self, AppState};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    setup_tracing(&config.log_filter).map_err(|e| anyhow!(e))?;

    info!(host = %config.host, port = config.port, "Starting OC Lettings");

    let system = SiteSystem::new(config.channel_buffer as usize);

    if config.seed_demo_data {
        let span = tracing::info_span!("seed_demo_data");
        seed_demo_data(&system.lettings_client, &system.profiles_client)
            .instrument(span)
            .await
            .context("failed to load demo data")?;
    }

    let app = web::router(AppState {
        lettings: system.lettings_client.clone(),
        profiles: system.profiles_client.clone(),
    });

    let listener = config
        .bind()
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    let addr = listener.local_addr().context("listener has no local address")?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    system.shutdown().await.context("actor shutdown failed")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod api;
mod config;
mod error;
mod oximetry;
mod service;

use config::Cli;
use service::state::create_shared_state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with colors and stderr output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oximetry_service=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let (primary_band, secondary_band) = cli.to_band_pair()?;
    let aggregation = cli.to_aggregation_method();

    tracing::info!(
        "Starting oximetry service on {}:{} ({} nm / {} nm pair)",
        cli.host,
        cli.listen,
        primary_band.as_nm(),
        secondary_band.as_nm()
    );
    tracing::info!(
        "Using {} aggregation of repeated readings",
        aggregation.create().name()
    );

    // Shared state carrying the configuration and the latest estimate
    let state = create_shared_state();
    {
        let mut state = state.write().await;
        state.primary_band = primary_band;
        state.secondary_band = secondary_band;
        state.aggregation = aggregation;
    }

    // Create and run HTTP server
    let router = api::create_router(state);
    let addr: SocketAddr = format!("{}:{}", cli.host, cli.listen).parse()?;

    tracing::info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run server with graceful shutdown
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down...");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C)
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Received shutdown signal");
}

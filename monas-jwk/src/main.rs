//! HTTP entry point: serves `/jwk` and the usage page.

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use monas_jwk::config::ServerConfig;
use monas_jwk::presentation;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env().context("Failed to load server configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let addr = config.socket_addr().context("Invalid listen address")?;
    let app = presentation::create_router(&config);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("monas-jwk server listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

//! Binary entry point: wire config, storage and the router together.

use anyhow::Result;
use homecatalog::catalog::Catalog;
use homecatalog::config::ServerConfig;
use homecatalog::server::{AppState, build_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::load()?;
    let catalog = Catalog::in_memory();
    let app = build_router(AppState::new(catalog, &config))?;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "home catalog API listening");
    axum::serve(listener, app).await?;

    Ok(())
}

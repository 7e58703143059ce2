mod catalog;
mod config;
mod contact;
mod errors;
mod github;
mod navigation;
mod routes;
mod state;
mod visuals;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::github::fetcher::ProfileFetcher;
use crate::github::GitHubClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Catalog::load(config.content_path.as_deref())
        .context("Failed to load content catalog")?;

    // One fetch per service lifetime, started before the first request arrives
    let github = GitHubClient::new(config.github_api_url.clone())
        .context("Failed to build GitHub client")?;
    let fetcher = ProfileFetcher::spawn(Arc::new(github), config.github_username.clone());
    info!(
        "GitHub fetch started for {} via {}",
        config.github_username, config.github_api_url
    );

    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        github: Arc::new(fetcher),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

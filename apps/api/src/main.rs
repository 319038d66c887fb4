mod config;
mod errors;
mod models;
mod repository;
mod routes;
mod screening;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::{Config, EmbeddingBackend};
use crate::repository::InMemoryRepository;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting screener v{}", env!("CARGO_PKG_VERSION"));

    match config.embedding_backend {
        EmbeddingBackend::Hash => info!(
            "Semantic backend: hash embedder ({} dims), TF-IDF fallback",
            config.embedding_dim
        ),
        EmbeddingBackend::None => info!("Semantic backend: TF-IDF only"),
    }
    info!("Department boost factor: {}", config.department_boost);

    // Session storage lives in memory; nothing is persisted across restarts
    let repository = Arc::new(InMemoryRepository::new());
    let state = AppState::new(&config, repository);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

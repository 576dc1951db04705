//! Library Catalog Service
//!
//! An HTTP service that lists the authors of a library catalog,
//! sorted by family name, with their life spans.
//!
//! ## Features
//!
//! - Author listing at a configurable path
//! - In-memory author store seeded from configuration
//! - Layered configuration from files and environment
//! - Structured logging and tracing

use catalog_service::{
    config::AppConfig, create_author_adapter, error::AppResult, server::AuthorServer,
    tracing::tracer::Tracer,
};
use tracing::info;

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = AppConfig::get();

    Tracer::install(config)?;

    info!(
        "Starting {} v{}",
        config.distribution.name,
        config.distribution.version.as_deref().unwrap_or("unknown"),
    );

    start(config).await?;

    Ok(())
}

async fn start(config: &AppConfig) -> AppResult<()> {
    let author_adapter = create_author_adapter(&config.database);

    let server = AuthorServer::bind(&config.server, author_adapter).await?;

    server.serve_until_ctrl_c().await?;

    Ok(())
}

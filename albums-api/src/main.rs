//! albums-api - In-memory albums catalog service
//!
//! Serves the album catalog over HTTP/JSON with generated OpenAPI
//! documentation. The catalog is seeded at startup and lives only for
//! the lifetime of the process.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use albums_api::{build_router, AppState};
use albums_common::{config, Catalog};

/// In-memory albums catalog service
#[derive(Debug, Parser)]
#[command(name = "albums-api", version)]
struct Cli {
    /// Listen address, e.g. 127.0.0.1:8080
    #[arg(long)]
    bind: Option<String>,

    /// Path to a TOML config file with a `bind_addr` key
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber before anything else
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting Albums API (albums-api) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let cli = Cli::parse();

    // Bind address resolution: CLI > env > config file > default
    let bind_addr = config::resolve_bind_addr(cli.bind.as_deref(), cli.config.as_deref())?;

    // Seed catalog is rebuilt on every process start; there is no
    // persistence.
    let catalog = Catalog::seeded();
    info!("Catalog seeded with {} albums", catalog.len());

    let state = AppState::new(catalog);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("albums-api listening on http://{bind_addr}");
    info!("API docs: http://{bind_addr}/docs");

    axum::serve(listener, app).await?;

    Ok(())
}

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gopher_translator_web::{AppState, ServerConfig, app};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    if config.uses_default_port() {
        info!("Port is not defined. Using default port: {}", config.port);
    }

    let app = app(AppState::new());

    let listener = tokio::net::TcpListener::bind(config.address()).await?;
    info!("Starting server on {}", config.address());

    axum::serve(listener, app).await?;

    Ok(())
}

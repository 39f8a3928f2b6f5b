use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use inkfeed::bridge::gemini::GeminiProvider;
use inkfeed::config::{Cli, Config};
use inkfeed::routes;
use inkfeed::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI args and load config
    let cli = Cli::parse();
    let config = Config::load(&cli)?;

    if config.provider.api_key.is_none() {
        tracing::warn!(
            "No API key found (set {} or provider.api_key); AI features will answer with fallbacks",
            config.provider.api_key_env
        );
    }
    tracing::info!(model = %config.provider.model, "Using generative provider");

    let provider = Arc::new(GeminiProvider::from_config(&config.provider));
    let state = AppState::new(&config, provider);

    let app = routes::app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Code Copilot API server.

use std::sync::Arc;

use api::{AppState, Config, ProviderConfig};
use database::{seed, Database};
use gemini_provider::GeminiProvider;
use mock_provider::EchoProvider;
use provider_core::CodeProvider;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting Code Copilot API");

    // Connect to database
    let db = Database::connect_with(&config.database_url, &config.pool).await?;
    db.migrate().await?;

    if config.seed_languages {
        seed::seed_languages(db.pool(), seed::DEFAULT_LANGUAGES).await?;
    }

    let provider: Arc<dyn CodeProvider> = match config.provider.clone() {
        ProviderConfig::Gemini(gemini) => Arc::new(GeminiProvider::new(gemini)?),
        ProviderConfig::Mock => {
            warn!("Using the mock echo provider; no real code will be generated");
            Arc::new(EchoProvider::new())
        }
    };
    info!(provider = provider.name(), "Provider ready");

    // Build application state
    let state = AppState::new(db.clone(), provider);
    let app = api::app(state, &config.cors_origin);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Code Copilot API listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

//! Rando API server entry point.

use std::net::SocketAddr;

use rando_api::config::ServerConfig;
use rando_api::error::AppError;
use rando_api::state::AppState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Rando API server");

    let config = ServerConfig::from_env()?;
    tracing::info!(
        max_attempts = ?config.limits.max_attempts(),
        max_length = ?config.limits.max_length(),
        "sampling limits configured"
    );

    let app_state = AppState::from_os_rng(config.limits);

    let app = rando_api::build_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}

//! rezervace-server — kindergarten time-slot reservation service
//!
//! Long-running service that:
//! - Publishes slot availability with per-slot capacity limits
//! - Accepts name-based reservations from the public booking page
//! - Provides an admin management API (JWT authenticated)
//! - Exports the day's roster as a formatted xlsx file

mod api;
mod auth;
mod config;
mod db;
mod error;
mod export;
mod state;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rezervace_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting rezervace-server (env: {})", config.environment);

    // Initialize application state: pool, migrations, slot grid sync
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("rezervace-server listening on {http_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

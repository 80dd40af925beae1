mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod state;
#[cfg(test)]
mod tests;
mod utils;

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Settings;
use middleware::{cors_layer, logging};
use models::create_pool;
use routes::create_app_router;
use services::{IamService, SettingsService, StartupService, StudyService};
use state::AppState;
use tower::ServiceBuilder;
use utils::shutdown_signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "grc_server=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::new().unwrap_or_else(|_| {
        tracing::warn!("Failed to load configuration, using defaults");
        Settings::default()
    });

    tracing::info!("Starting GRC server...");

    // Create database connection pool
    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    tracing::info!("Database connection pool created");

    // Seed the root folder, main entity and client settings before serving
    StartupService::new(pool.clone()).ensure_seeded().await?;

    // Create services
    let study_service = Arc::new(StudyService::new(pool.clone()));
    let settings_service = Arc::new(SettingsService::new(pool.clone(), settings.storage.clone()));
    let iam_service = Arc::new(IamService::new(pool.clone()));

    let app_state = AppState::new(
        study_service,
        settings_service,
        iam_service,
        settings.build.clone(),
    );

    // Build application router with API endpoints
    let app = create_app_router(app_state).layer(
        ServiceBuilder::new()
            .layer(cors_layer())
            .layer(axum::middleware::from_fn(logging::log_requests)),
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

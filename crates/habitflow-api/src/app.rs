//! Server bootstrap: pool, migrations, state wiring, and the Axum serve loop.

use habitflow_core::config::AppConfig;
use habitflow_core::error::AppError;
use habitflow_database::{connection, migration};

use crate::router::build_router;
use crate::state::AppState;

/// Runs the HabitFlow server with the given configuration.
///
/// Connects to PostgreSQL, applies pending migrations, wires the
/// application state, and serves until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting HabitFlow server...");

    let db_pool = connection::create_pool(&config.database).await?;
    migration::run_migrations(&db_pool).await?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::build(config, db_pool).await?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("HabitFlow server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

pub mod modules;
pub mod router;
mod schema;
pub mod shared;

use router::{build_router, AppState};
use shared::{AppConfig, Database};
use std::sync::Arc;

/// Open the database, apply migrations and serve HTTP until Ctrl-C
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let db = Arc::new(Database::connect(&config.database)?);
    db.run_migrations()?;

    let pool = db.pool_status();
    log_info!(
        "Database pool ready: {} of {} connection(s) open, {} idle",
        pool.connections,
        pool.max_size,
        pool.idle_connections
    );

    let app = build_router(AppState::from_database(db));

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    log_info!("Show catalog listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log_info!("Shutdown signal received"),
        Err(e) => log_error!("Failed to listen for shutdown signal: {}", e),
    }
}

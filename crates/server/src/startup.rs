use std::time::Duration;

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect, migrate and seed per `cfg`, or fall back to in-memory content
/// when `database.url = "memory"`.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    let timeout = Duration::from_millis(cfg.database.storage_timeout_ms);
    if cfg.database.is_memory() {
        warn!("database.url = memory; page content is not persisted and domain endpoints are disabled");
        return Ok(ServerState::in_memory(timeout));
    }

    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database))
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Database(format!("migrate up: {e}")))?;
    info!("migrations applied");

    let state = ServerState::with_database(db, timeout);
    if cfg.seed.enabled {
        if let Some(db) = state.db.as_ref() {
            service::seed::seed_if_empty(db, &state.content)
                .await
                .map_err(|e| StartupError::Database(format!("seed: {e}")))?;
        }
    }
    Ok(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl_c handler unavailable");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let has_frontend = common::env::ensure_env(&cfg.server.frontend_dir).await?;

    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(
        state,
        build_cors(),
        has_frontend.then_some(cfg.server.frontend_dir.as_str()),
    );

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, memory = cfg.database.is_memory(), "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

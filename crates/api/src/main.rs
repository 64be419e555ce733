use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atlas_api::config::ServerConfig;
use atlas_api::router::build_app_router;
use atlas_api::server::{serve, ShutdownOutcome};
use atlas_api::state::AppState;
use atlas_db::{DatabaseConfig, PgDatabase};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atlas_api=debug,atlas_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let db_config = DatabaseConfig::from_env().context("Invalid database configuration")?;
    tracing::info!(
        db_host = %db_config.host,
        db_port = db_config.port,
        database = %db_config.database,
        "Loaded database configuration",
    );

    // --- Database ---
    let pool = atlas_db::create_pool(&db_config, config.db_max_connections)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    let db = Arc::new(PgDatabase::new(pool.clone()));
    atlas_db::health_check(db.as_ref())
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    // --- App state ---
    let state = AppState {
        db,
        config: Arc::new(config.clone()),
    };

    // --- Router ---
    let app = build_app_router(state);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().context("Invalid HOST address")?,
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    let grace = Duration::from_secs(config.shutdown_timeout_secs);
    let outcome = serve(listener, app, grace, shutdown_signal()).await?;

    // --- Post-shutdown cleanup ---
    match outcome {
        ShutdownOutcome::Drained => {
            pool.close().await;
            tracing::info!("Database pool closed");
            tracing::info!("Graceful shutdown complete");
        }
        // Abandoned requests still hold pooled connections; closing the pool
        // would wait for them. Returning drops the runtime and those tasks.
        ShutdownOutcome::Forced => {
            tracing::warn!("Exiting with requests still in flight");
        }
    }

    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

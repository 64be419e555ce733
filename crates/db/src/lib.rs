//! Persistence layer for the Atlas service.
//!
//! Holds the connection settings, the [`Database`] capability trait with its
//! PostgreSQL implementation, the entity models, and one repository per
//! table.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod database;
pub mod models;
pub mod repositories;

pub use config::{ConfigError, DatabaseConfig};
pub use database::{Database, DbError, PgDatabase, Record, SqlParam, SqlValue};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from the loaded connection settings.
pub async fn create_pool(
    config: &DatabaseConfig,
    max_connections: u32,
) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        max_connections,
        "Connecting to PostgreSQL",
    );

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(config.connect_options())
        .await
}

/// Round-trip a trivial query to confirm the database answers.
pub async fn health_check(db: &dyn Database) -> Result<(), DbError> {
    db.query_row("SELECT 1", &[]).await.map(|_| ())
}

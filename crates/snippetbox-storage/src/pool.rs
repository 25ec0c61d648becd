use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::StorageError;

/// Build a SQLite connection pool for `dsn` and check that it is reachable.
///
/// `sqlite::memory:` databases live inside a single connection, so callers
/// using one should pass `max_connections = 1`.
pub async fn connect(dsn: &str, max_connections: u32) -> Result<SqlitePool, StorageError> {
    let options = SqliteConnectOptions::from_str(dsn)
        .map_err(|e| StorageError::Connect(format!("invalid DSN: {e}")))?;

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        // In-memory databases vanish with their last connection.
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connect(e.to_string()))?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_err(|e| StorageError::Connect(e.to_string()))?;

    tracing::debug!(max_connections, "database pool ready");
    Ok(pool)
}

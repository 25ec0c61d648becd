use sqlx::SqlitePool;

use crate::error::StorageError;

const CREATE_SNIPPETS: &str = "\
CREATE TABLE IF NOT EXISTS snippets (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    title   TEXT    NOT NULL,
    content TEXT    NOT NULL,
    created INTEGER NOT NULL,
    expires INTEGER NOT NULL
)";

const CREATE_CREATED_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_snippets_created ON snippets (created)";

/// Create the `snippets` table and its index if they do not exist yet.
///
/// Timestamps are stored as UTC unix seconds.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), StorageError> {
    sqlx::query(CREATE_SNIPPETS).execute(pool).await?;
    sqlx::query(CREATE_CREATED_INDEX).execute(pool).await?;
    Ok(())
}

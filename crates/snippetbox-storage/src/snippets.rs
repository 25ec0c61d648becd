use jiff::Timestamp;
use sqlx::{FromRow, SqlitePool};

use snippetbox_core::error::CoreError;
use snippetbox_core::models::expiry::Expiry;
use snippetbox_core::models::snippet::Snippet;

use crate::error::StorageError;

/// Number of snippets shown on the home page.
pub const LATEST_LIMIT: u32 = 10;

#[derive(Debug, FromRow)]
struct SnippetRow {
    id: i64,
    title: String,
    content: String,
    created: i64,
    expires: i64,
}

impl SnippetRow {
    fn into_snippet(self) -> Result<Snippet, StorageError> {
        let id = self.id;
        let timestamp = |secs: i64| {
            Timestamp::from_second(secs).map_err(|e| StorageError::InvalidTimestamp {
                id,
                message: e.to_string(),
            })
        };

        Ok(Snippet {
            id,
            created: timestamp(self.created)?,
            expires: timestamp(self.expires)?,
            title: self.title,
            content: self.content,
        })
    }
}

/// Handle to the `snippets` table.
///
/// Cloning is cheap: clones share the underlying connection pool, which is
/// safe to use from many requests at once.
#[derive(Debug, Clone)]
pub struct SnippetStore {
    pool: SqlitePool,
}

impl SnippetStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a new snippet expiring `expiry` after now. Returns its id.
    ///
    /// Title and content are stored as given; rejecting empty input is the
    /// caller's job.
    pub async fn insert(
        &self,
        title: &str,
        content: &str,
        expiry: Expiry,
    ) -> Result<i64, StorageError> {
        let created = now()?;
        let expires = expiry.expires_at(created)?;

        let result = sqlx::query(
            "INSERT INTO snippets (title, content, created, expires) VALUES (?, ?, ?, ?)",
        )
        .bind(title)
        .bind(content)
        .bind(created.as_second())
        .bind(expires.as_second())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, expires_in_days = expiry.days(), "inserted snippet");
        Ok(id)
    }

    /// Fetch a snippet that has not expired yet.
    pub async fn get(&self, id: i64) -> Result<Snippet, StorageError> {
        let row: Option<SnippetRow> = sqlx::query_as(
            "SELECT id, title, content, created, expires FROM snippets \
             WHERE expires > ? AND id = ?",
        )
        .bind(now()?.as_second())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row.into_snippet(),
            None => Err(StorageError::NotFound { id }),
        }
    }

    /// Up to `limit` unexpired snippets, newest first.
    pub async fn latest(&self, limit: u32) -> Result<Vec<Snippet>, StorageError> {
        let rows: Vec<SnippetRow> = sqlx::query_as(
            "SELECT id, title, content, created, expires FROM snippets \
             WHERE expires > ? ORDER BY created DESC, id DESC LIMIT ?",
        )
        .bind(now()?.as_second())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SnippetRow::into_snippet).collect()
    }

    /// Total number of stored rows, expired ones included.
    pub async fn count(&self) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM snippets")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Current time truncated to whole seconds, matching the column precision.
fn now() -> Result<Timestamp, StorageError> {
    let secs = Timestamp::now().as_second();
    Ok(Timestamp::from_second(secs).map_err(CoreError::from)?)
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("snippet not found: {id}")]
    NotFound { id: i64 },

    #[error("database connect error: {0}")]
    Connect(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid timestamp in row {id}: {message}")]
    InvalidTimestamp { id: i64, message: String },

    #[error(transparent)]
    Core(#[from] snippetbox_core::error::CoreError),
}

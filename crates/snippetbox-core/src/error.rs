use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid expiry: {0} (expected 1, 7 or 365 days)")]
    InvalidExpiry(String),

    #[error("timestamp out of range: {0}")]
    Timestamp(#[from] jiff::Error),
}

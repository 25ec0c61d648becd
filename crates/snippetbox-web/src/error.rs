use std::panic::Location;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use snippetbox_render::error::RenderError;
use snippetbox_storage::error::StorageError;

/// Unified error type for all route handlers.
///
/// Clients only ever see the status line text; the detail of an internal
/// error goes to the error log together with where it was raised.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    Internal {
        message: String,
        location: &'static Location<'static>,
    },
}

impl AppError {
    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
            location: Location::caller(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal { message, location } => {
                tracing::error!(%location, "internal error: {message}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, status.canonical_reason().unwrap_or_default()).into_response()
    }
}

impl From<StorageError> for AppError {
    #[track_caller]
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound { .. } => AppError::NotFound,
            other => AppError::internal(other.to_string()),
        }
    }
}

impl From<RenderError> for AppError {
    #[track_caller]
    fn from(e: RenderError) -> Self {
        AppError::internal(e.to_string())
    }
}

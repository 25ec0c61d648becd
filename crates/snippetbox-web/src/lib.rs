//! snippetbox-web
//!
//! HTTP routes, handlers and shared state for the snippet service.

use std::path::PathBuf;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware as axum_mw;
use axum::routing::get;
use tower_http::timeout::TimeoutLayer;

pub mod config;
pub mod error;
pub mod forms;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod views;

use state::AppState;

/// Upper bound on the time spent serving one request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// The full application router. Static assets are served from `static_dir`.
pub fn app(state: AppState, static_dir: impl Into<PathBuf>) -> Router {
    Router::new()
        .route("/", get(routes::snippets::home))
        .route("/snippet/view", get(routes::snippets::view_snippet))
        .route(
            "/snippet/create",
            get(routes::snippets::create_form).post(routes::snippets::create_snippet),
        )
        .route("/health", get(routes::health::health_check))
        .nest_service("/static", routes::static_files::service(static_dir))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .layer(axum_mw::from_fn(middleware::request_log::log_request))
        .with_state(state)
}

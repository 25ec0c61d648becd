use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;

/// One log line per request, tagged with the route that handled it.
///
/// Server errors are logged at `warn` here; the handler that failed has
/// already written the detail at `error`.
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned());
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let route = route.as_deref().unwrap_or("-");
    if status.is_server_error() {
        tracing::warn!(%method, %path, route, status = status.as_u16(), elapsed_ms, "request failed");
    } else {
        tracing::info!(%method, %path, route, status = status.as_u16(), elapsed_ms, "request served");
    }

    response
}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::extract::{OriginalUri, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self as axum_mw, Next};
use axum::response::{IntoResponse, Redirect, Response};
use tower_http::services::ServeDir;

/// What the static handler should do with a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Hand the request to the file server.
    Serve,
    /// A directory with an index, asked for without its trailing slash.
    AddSlash,
    /// Answer 404 without touching the file server.
    NotFound,
}

/// Gatekeeper for the static file root.
///
/// A directory is only ever served through its `index.html`; a directory
/// without one is reported as missing so its contents are never listed.
#[derive(Debug, Clone)]
pub struct NeuteredDir {
    root: Arc<PathBuf>,
}

impl NeuteredDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn lookup(&self, request_path: &str) -> Lookup {
        let Some(relative) = relative_path(request_path) else {
            return Lookup::NotFound;
        };
        let path = self.root.join(relative);

        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_dir() => {
                let has_index = tokio::fs::metadata(path.join("index.html"))
                    .await
                    .is_ok_and(|m| m.is_file());
                match (has_index, request_path.ends_with('/')) {
                    (false, _) => Lookup::NotFound,
                    (true, true) => Lookup::Serve,
                    (true, false) => Lookup::AddSlash,
                }
            }
            // Plain files and missing paths are the file server's business.
            _ => Lookup::Serve,
        }
    }
}

/// Turn a URL path into a path relative to the root, refusing `..`.
fn relative_path(request_path: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for segment in request_path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            s if s.contains('\\') || s.contains('\0') => return None,
            s => relative.push(s),
        }
    }
    Some(relative)
}

async fn reject_bare_directories(
    State(dir): State<NeuteredDir>,
    req: Request,
    next: Next,
) -> Response {
    match dir.lookup(req.uri().path()).await {
        Lookup::Serve => next.run(req).await,
        // The nested URI has lost the mount prefix.
        Lookup::AddSlash => {
            let original = req
                .extensions()
                .get::<OriginalUri>()
                .map(|uri| uri.0.clone())
                .unwrap_or_else(|| req.uri().clone());
            let target = match original.query() {
                Some(query) => format!("{}/?{query}", original.path()),
                None => format!("{}/", original.path()),
            };
            Redirect::temporary(&target).into_response()
        }
        Lookup::NotFound => {
            tracing::debug!(path = %req.uri().path(), "refusing directory without index");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// File server for `root`, meant to be nested under a URL prefix.
pub fn service(root: impl Into<PathBuf>) -> Router {
    let dir = NeuteredDir::new(root);
    let files = ServeDir::new(dir.root()).append_index_html_on_directories(true);

    Router::new()
        .fallback_service(files)
        .layer(axum_mw::from_fn_with_state(dir, reject_bare_directories))
}

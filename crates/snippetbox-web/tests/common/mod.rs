#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use tower::ServiceExt;

use snippetbox_render::cache::TemplateCache;
use snippetbox_storage::pool::connect;
use snippetbox_storage::schema::ensure_schema;
use snippetbox_storage::snippets::SnippetStore;
use snippetbox_web::state::AppState;

pub fn ui_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("ui")
}

pub struct TestApp {
    pub router: Router,
    pub store: SnippetStore,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_static_dir(ui_dir().join("static")).await
    }

    pub async fn with_static_dir(static_dir: impl Into<PathBuf>) -> Self {
        let pool = connect("sqlite::memory:", 1).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        let store = SnippetStore::new(pool);

        let ui = ui_dir();
        let templates =
            TemplateCache::load(ui.join("html").join("pages"), ui.join("html").join("partials"))
                .unwrap();
        let state = AppState::new(store.clone(), templates);

        Self {
            router: snippetbox_web::app(state, static_dir),
            store,
        }
    }

    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> TestResponse {
        let req = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(req).await
    }
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

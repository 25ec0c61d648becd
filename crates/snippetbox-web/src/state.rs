use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use snippetbox_render::cache::TemplateCache;
use snippetbox_storage::snippets::SnippetStore;

use crate::error::AppError;
use crate::views::TemplateData;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Built once in `main`; nothing in it is mutated while serving.
#[derive(Debug, Clone)]
pub struct AppState {
    pub snippets: SnippetStore,
    pub templates: Arc<TemplateCache>,
}

impl AppState {
    pub fn new(snippets: SnippetStore, templates: TemplateCache) -> Self {
        Self {
            snippets,
            templates: Arc::new(templates),
        }
    }

    /// Render a cached page into a response with the given status.
    pub fn render(
        &self,
        status: StatusCode,
        page: &str,
        data: &TemplateData,
    ) -> Result<Response, AppError> {
        let body = self.templates.render(page, data)?;
        Ok((status, Html(body)).into_response())
    }
}

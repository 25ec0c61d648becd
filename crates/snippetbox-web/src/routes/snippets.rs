use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;

use snippetbox_storage::snippets::LATEST_LIMIT;

use crate::error::AppError;
use crate::forms::{FormView, SnippetForm};
use crate::state::AppState;
use crate::views::{SnippetView, TemplateData};

pub async fn home(State(state): State<AppState>) -> Result<Response, AppError> {
    let snippets = state.snippets.latest(LATEST_LIMIT).await?;

    let data = TemplateData {
        snippets: snippets.iter().map(SnippetView::from).collect(),
        ..TemplateData::new()
    };
    state.render(StatusCode::OK, "home.html", &data)
}

pub async fn view_snippet(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(pairs) = query.map_err(|_| AppError::NotFound)?;
    let id = single_id(&pairs).ok_or(AppError::NotFound)?;

    let snippet = state.snippets.get(id).await?;

    let data = TemplateData {
        snippet: Some(SnippetView::from(&snippet)),
        ..TemplateData::new()
    };
    state.render(StatusCode::OK, "view.html", &data)
}

pub async fn create_form(State(state): State<AppState>) -> Result<Response, AppError> {
    let data = TemplateData {
        form: Some(FormView::blank()),
        ..TemplateData::new()
    };
    state.render(StatusCode::OK, "create.html", &data)
}

pub async fn create_snippet(
    State(state): State<AppState>,
    Form(form): Form<SnippetForm>,
) -> Result<Response, AppError> {
    let snippet = match form.validate() {
        Ok(snippet) => snippet,
        Err(errors) => {
            let data = TemplateData {
                form: Some(FormView {
                    values: form,
                    errors,
                }),
                ..TemplateData::new()
            };
            return state.render(StatusCode::UNPROCESSABLE_ENTITY, "create.html", &data);
        }
    };

    let id = state
        .snippets
        .insert(&snippet.title, &snippet.content, snippet.expiry)
        .await?;
    tracing::info!(id, expires_in_days = snippet.expiry.days(), "snippet created");

    Ok(Redirect::to(&format!("/snippet/view?id={id}")).into_response())
}

/// The `id` parameter, when it appears exactly once and is valid.
fn single_id(pairs: &[(String, String)]) -> Option<i64> {
    let mut ids = pairs.iter().filter(|(key, _)| key == "id");
    match (ids.next(), ids.next()) {
        (Some((_, raw)), None) => parse_id(raw),
        _ => None,
    }
}

/// Snippet ids are positive integers; anything else can never match a row.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id >= 1)
}

use jiff::{Timestamp, Zoned};
use serde::Serialize;

use snippetbox_core::models::snippet::Snippet;

use crate::forms::FormView;

/// Everything a page template can read.
#[derive(Debug, Default, Serialize)]
pub struct TemplateData {
    pub current_year: i16,
    pub snippet: Option<SnippetView>,
    pub snippets: Vec<SnippetView>,
    pub form: Option<FormView>,
}

impl TemplateData {
    pub fn new() -> Self {
        Self {
            current_year: Zoned::now().year(),
            ..Self::default()
        }
    }
}

/// A snippet with its timestamps already formatted for display.
#[derive(Debug, Clone, Serialize)]
pub struct SnippetView {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created: String,
    pub expires: String,
}

impl From<&Snippet> for SnippetView {
    fn from(snippet: &Snippet) -> Self {
        Self {
            id: snippet.id,
            title: snippet.title.clone(),
            content: snippet.content.clone(),
            created: human_date(snippet.created),
            expires: human_date(snippet.expires),
        }
    }
}

/// `02 Jan 2026 at 15:04`, in UTC.
pub fn human_date(ts: Timestamp) -> String {
    ts.strftime("%d %b %Y at %H:%M").to_string()
}

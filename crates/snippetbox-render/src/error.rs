use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read template directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template parse error in {page}: {message}")]
    Parse { page: String, message: String },

    #[error("page {0} has the same name as a shared fragment")]
    DuplicateName(String),

    #[error("no page templates found in {0}")]
    NoPages(PathBuf),

    #[error("template not found: {0}")]
    NotFound(String),

    #[error("template rendering failed: {0}")]
    Render(String),
}

impl From<tera::Error> for RenderError {
    fn from(e: tera::Error) -> Self {
        RenderError::Render(render_chain(&e))
    }
}

/// Tera nests the useful message in the error's source chain.
pub(crate) fn render_chain(e: &tera::Error) -> String {
    let mut message = e.to_string();
    let mut source = std::error::Error::source(e);
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

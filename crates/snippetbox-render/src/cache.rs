use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::{RenderError, render_chain};

/// Every page template parsed together with the shared layout and partials.
///
/// Built once at startup and never modified afterwards, so a single instance
/// can be shared across all request handlers.
#[derive(Debug)]
pub struct TemplateCache {
    pages: HashMap<String, Tera>,
}

struct TemplateFile {
    path: PathBuf,
    name: String,
}

impl TemplateCache {
    /// Parse every `*.html` file in `pages_dir`, each combined with all
    /// `*.html` fragments in `partials_dir`.
    ///
    /// Pages are keyed by file name (`home.html`). Pages may extend or
    /// include fragments by their file name too.
    pub fn load(
        pages_dir: impl AsRef<Path>,
        partials_dir: impl AsRef<Path>,
    ) -> Result<Self, RenderError> {
        let pages_dir = pages_dir.as_ref();
        let pages = html_files(pages_dir)?;
        if pages.is_empty() {
            return Err(RenderError::NoPages(pages_dir.to_path_buf()));
        }
        let fragments = html_files(partials_dir.as_ref())?;

        let mut cache = HashMap::with_capacity(pages.len());
        for page in &pages {
            if fragments.iter().any(|f| f.name == page.name) {
                return Err(RenderError::DuplicateName(page.name.clone()));
            }

            let mut files: Vec<(&Path, Option<&str>)> = fragments
                .iter()
                .map(|f| (f.path.as_path(), Some(f.name.as_str())))
                .collect();
            files.push((page.path.as_path(), Some(page.name.as_str())));

            let mut tera = Tera::default();
            tera.add_template_files(files)
                .map_err(|e| RenderError::Parse {
                    page: page.name.clone(),
                    message: render_chain(&e),
                })?;

            cache.insert(page.name.clone(), tera);
        }

        tracing::debug!(pages = cache.len(), fragments = fragments.len(), "template cache built");
        Ok(Self { pages: cache })
    }

    /// Render the page `name` with `data` as its context.
    ///
    /// `data` must serialize to a map; its keys become template variables.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        let tera = self
            .pages
            .get(name)
            .ok_or_else(|| RenderError::NotFound(name.to_string()))?;
        let context = Context::from_serialize(data)?;
        Ok(tera.render(name, &context)?)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pages.contains_key(name)
    }

    /// Page names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// `*.html` files directly inside `dir`, sorted by name.
fn html_files(dir: &Path) -> Result<Vec<TemplateFile>, RenderError> {
    let io_err = |source| RenderError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        if !entry.file_type().map_err(io_err)?.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        files.push(TemplateFile {
            name: name.to_string(),
            path,
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

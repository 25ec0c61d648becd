use std::fs;
use std::path::Path;

use serde::Serialize;
use tempfile::TempDir;

use snippetbox_render::cache::TemplateCache;
use snippetbox_render::error::RenderError;

const BASE: &str = r#"<html><title>{% block title %}{% endblock %}</title>
<body>{% block main %}{% endblock %}{% include "footer.html" %}</body></html>"#;
const FOOTER: &str = "<footer>{{ year }}</footer>";
const HOME: &str = r#"{% extends "base.html" %}{% block title %}Home{% endblock %}
{% block main %}<p>{{ message }}</p>{% endblock %}"#;

#[derive(Serialize)]
struct Data<'a> {
    year: i16,
    message: &'a str,
}

struct Fixture {
    _root: TempDir,
    pages: std::path::PathBuf,
    partials: std::path::PathBuf,
}

fn fixture(pages: &[(&str, &str)], partials: &[(&str, &str)]) -> Fixture {
    let root = tempfile::tempdir().unwrap();
    let pages_dir = root.path().join("pages");
    let partials_dir = root.path().join("partials");
    write_all(&pages_dir, pages);
    write_all(&partials_dir, partials);
    Fixture {
        _root: root,
        pages: pages_dir,
        partials: partials_dir,
    }
}

fn write_all(dir: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(dir).unwrap();
    for (name, body) in files {
        fs::write(dir.join(name), body).unwrap();
    }
}

fn standard() -> Fixture {
    fixture(
        &[("home.html", HOME)],
        &[("base.html", BASE), ("footer.html", FOOTER)],
    )
}

#[test]
fn renders_page_with_layout_and_partials() {
    let f = standard();
    let cache = TemplateCache::load(&f.pages, &f.partials).unwrap();

    let html = cache
        .render("home.html", &Data { year: 2026, message: "hello" })
        .unwrap();
    assert!(html.contains("<title>Home</title>"));
    assert!(html.contains("<p>hello</p>"));
    assert!(html.contains("<footer>2026</footer>"));
}

#[test]
fn escapes_html_in_values() {
    let f = standard();
    let cache = TemplateCache::load(&f.pages, &f.partials).unwrap();

    let html = cache
        .render("home.html", &Data { year: 2026, message: "<script>" })
        .unwrap();
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn keys_are_page_file_names_only() {
    let f = fixture(
        &[("home.html", HOME), ("about.html", "{% extends \"base.html\" %}")],
        &[("base.html", BASE), ("footer.html", FOOTER), ("notes.txt", "ignored")],
    );
    let cache = TemplateCache::load(&f.pages, &f.partials).unwrap();

    assert_eq!(cache.names(), vec!["about.html", "home.html"]);
    assert!(!cache.contains("base.html"));
    assert_eq!(cache.len(), 2);
}

#[test]
fn unknown_page_is_an_error() {
    let f = standard();
    let cache = TemplateCache::load(&f.pages, &f.partials).unwrap();

    let err = cache
        .render("missing.html", &Data { year: 2026, message: "" })
        .unwrap_err();
    assert!(matches!(err, RenderError::NotFound(name) if name == "missing.html"));
}

#[test]
fn parse_errors_name_the_page() {
    let f = fixture(
        &[("broken.html", "{% if %}")],
        &[("base.html", BASE), ("footer.html", FOOTER)],
    );

    let err = TemplateCache::load(&f.pages, &f.partials).unwrap_err();
    assert!(matches!(err, RenderError::Parse { page, .. } if page == "broken.html"));
}

#[test]
fn missing_parent_layout_fails_at_load() {
    let f = fixture(&[("home.html", HOME)], &[("footer.html", FOOTER)]);
    let err = TemplateCache::load(&f.pages, &f.partials).unwrap_err();
    assert!(matches!(err, RenderError::Parse { .. }));
}

#[test]
fn page_name_may_not_shadow_a_fragment() {
    let f = fixture(&[("base.html", BASE)], &[("base.html", BASE)]);
    let err = TemplateCache::load(&f.pages, &f.partials).unwrap_err();
    assert!(matches!(err, RenderError::DuplicateName(name) if name == "base.html"));
}

#[test]
fn empty_pages_directory_is_an_error() {
    let f = fixture(&[], &[("base.html", BASE)]);
    let err = TemplateCache::load(&f.pages, &f.partials).unwrap_err();
    assert!(matches!(err, RenderError::NoPages(_)));
}

#[test]
fn missing_directory_is_an_io_error() {
    let root = tempfile::tempdir().unwrap();
    let err = TemplateCache::load(root.path().join("nope"), root.path()).unwrap_err();
    assert!(matches!(err, RenderError::Io { .. }));
}

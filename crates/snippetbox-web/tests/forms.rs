use snippetbox_core::models::expiry::Expiry;
use snippetbox_web::forms::{FormView, MAX_TITLE_CHARS, SnippetForm};

fn form(title: &str, content: &str, expires: &str) -> SnippetForm {
    SnippetForm {
        title: title.to_string(),
        content: content.to_string(),
        expires: expires.to_string(),
    }
}

#[test]
fn accepts_complete_form() {
    let valid = form("Test", "Hello", "7").validate().unwrap();
    assert_eq!(valid.title, "Test");
    assert_eq!(valid.content, "Hello");
    assert_eq!(valid.expiry, Expiry::Week);
}

#[test]
fn reports_every_bad_field() {
    let errors = form("  ", "", "30").validate().unwrap_err();
    assert_eq!(errors.title.as_deref(), Some("This field cannot be blank"));
    assert_eq!(errors.content.as_deref(), Some("This field cannot be blank"));
    assert_eq!(errors.expires.as_deref(), Some("This field is invalid"));
}

#[test]
fn only_the_bad_field_is_flagged() {
    let errors = form("Title", "", "1").validate().unwrap_err();
    assert!(errors.title.is_none());
    assert!(errors.content.is_some());
    assert!(errors.expires.is_none());
}

#[test]
fn title_length_counts_characters() {
    let exact = "é".repeat(MAX_TITLE_CHARS);
    assert!(form(&exact, "x", "1").validate().is_ok());

    let long = "é".repeat(MAX_TITLE_CHARS + 1);
    let errors = form(&long, "x", "1").validate().unwrap_err();
    assert!(errors.title.unwrap().contains("too long"));
}

#[test]
fn blank_form_preselects_default_expiry() {
    let view = FormView::blank();
    assert_eq!(view.values.expires, "365");
    assert!(view.errors.is_empty());
}

use serde::{Deserialize, Serialize};

use snippetbox_core::models::expiry::Expiry;

pub const MAX_TITLE_CHARS: usize = 100;

const BLANK: &str = "This field cannot be blank";

/// Raw fields posted by the create form.
///
/// Missing fields deserialize as empty strings so they surface as
/// validation messages instead of extractor rejections.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SnippetForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub expires: String,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnippet {
    pub title: String,
    pub content: String,
    pub expiry: Expiry,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub content: Option<String>,
    pub expires: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.expires.is_none()
    }
}

/// The create form as rendered: submitted values plus any messages.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    #[serde(flatten)]
    pub values: SnippetForm,
    pub errors: FieldErrors,
}

impl FormView {
    pub fn blank() -> Self {
        Self {
            values: SnippetForm {
                expires: Expiry::default().to_string(),
                ..SnippetForm::default()
            },
            errors: FieldErrors::default(),
        }
    }
}

impl SnippetForm {
    pub fn validate(&self) -> Result<NewSnippet, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.title.trim().is_empty() {
            errors.title = Some(BLANK.to_string());
        } else if self.title.chars().count() > MAX_TITLE_CHARS {
            errors.title = Some(format!(
                "This field is too long (maximum is {MAX_TITLE_CHARS} characters)"
            ));
        }

        if self.content.trim().is_empty() {
            errors.content = Some(BLANK.to_string());
        }

        let expiry = match self.expires.parse::<Expiry>() {
            Ok(expiry) => Some(expiry),
            Err(_) => {
                errors.expires = Some("This field is invalid".to_string());
                None
            }
        };

        match expiry {
            Some(expiry) if errors.is_empty() => Ok(NewSnippet {
                title: self.title.clone(),
                content: self.content.clone(),
                expiry,
            }),
            _ => Err(errors),
        }
    }
}

use serde::Deserialize;

use super::types::SearchRequest;

pub const QUERY_MIN_CHARS: usize = 3;
pub const SIZE_MIN: u32 = 50;
pub const SIZE_MAX: u32 = 600;

pub const MSG_QUERY_REQUIRED: &str = "You need to provide the word or sentence to search";
pub const MSG_QUERY_MIN: &str = "The word needs to have at least 3 characters";
pub const MSG_SIZE_REQUIRED: &str = "A size is needed";
pub const MSG_SIZE_NUMBER: &str = "The size needs to be a number";
pub const MSG_SIZE_MIN: &str = "The minimum average response is 50";
pub const MSG_SIZE_MAX: &str = "The maximum average response is 600";

/// Raw form fields as they arrive on the submission route. Everything is
/// optional here; `validate_form` decides what is actually required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    pub query: Option<String>,
    pub size: Option<String>,
    pub key: Option<String>,
    #[serde(rename = "matchWord")]
    pub match_word: Option<String>,
}

/// A validation failure attached to a single form field, rendered inline next
/// to that field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Check every field and either produce a well-formed request or the full list
/// of per-field errors. No backend request is issued when this returns `Err`.
pub fn validate_form(form: &SearchForm) -> Result<SearchRequest, Vec<FieldError>> {
    let mut errors = Vec::new();

    let query = form.query.as_deref().unwrap_or("").trim().to_string();
    if query.is_empty() {
        errors.push(FieldError::new("query", MSG_QUERY_REQUIRED));
    } else if query.chars().count() < QUERY_MIN_CHARS {
        errors.push(FieldError::new("query", MSG_QUERY_MIN));
    }

    let size_raw = form.size.as_deref().unwrap_or("").trim();
    let mut size = 0u32;
    if size_raw.is_empty() {
        errors.push(FieldError::new("size", MSG_SIZE_REQUIRED));
    } else {
        match size_raw.parse::<u32>() {
            Err(_) => errors.push(FieldError::new("size", MSG_SIZE_NUMBER)),
            Ok(value) if value < SIZE_MIN => errors.push(FieldError::new("size", MSG_SIZE_MIN)),
            Ok(value) if value > SIZE_MAX => errors.push(FieldError::new("size", MSG_SIZE_MAX)),
            Ok(value) => size = value,
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let key = form
        .key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string);

    // Checkbox wire encoding: present as "on" when checked, absent otherwise.
    let match_whole_word = form.match_word.as_deref() == Some("on");

    Ok(SearchRequest {
        query,
        size,
        key,
        match_whole_word,
    })
}

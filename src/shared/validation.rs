use std::collections::BTreeMap;
use std::fmt;

use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Maximum length of every VARCHAR column
pub const MAX_STRING_LENGTH: u64 = 255;

/// Per-field validation messages, keyed by the request field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }

    /// `Ok(())` when nothing was collected, otherwise the collected errors
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(String::as_str).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut collected = FieldErrors::new();
        for (field, kind) in errors.errors() {
            if let ValidationErrorsKind::Field(field_errors) = kind {
                for error in field_errors {
                    collected.add(field, describe(field, error));
                }
            }
        }
        collected
    }
}

/// Human readable name of a field: `category_id` -> `category id`
pub fn display_name(field: &str) -> String {
    field.replace('_', " ")
}

pub fn required_message(field: &str) -> String {
    format!("The {} field is required.", display_name(field))
}

pub fn max_length_message(field: &str) -> String {
    format!(
        "The {} field must not be greater than {} characters.",
        display_name(field),
        MAX_STRING_LENGTH
    )
}

pub fn unique_message(field: &str) -> String {
    format!("The {} has already been taken.", display_name(field))
}

pub fn selected_invalid_message(field: &str) -> String {
    format!("The selected {} is invalid.", display_name(field))
}

/// Message for a value of the wrong JSON type, worded after the type the
/// field expects
pub fn invalid_type_message(field: &str, error: &serde_json::Error) -> String {
    let detail = error.to_string();
    let expected = detail
        .split_once("expected ")
        .map(|(_, expected)| expected)
        .unwrap_or_default();
    let name = display_name(field);
    if expected.starts_with("a string") {
        format!("The {} field must be a string.", name)
    } else if expected.starts_with("a boolean") {
        format!("The {} field must be true or false.", name)
    } else if expected.starts_with('i') || expected.starts_with('u') {
        format!("The {} field must be an integer.", name)
    } else {
        format!("The {} field is invalid.", name)
    }
}

fn describe(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }
    match &*error.code {
        "required" | "blank" => required_message(field),
        "length" => max_length_message(field),
        "level" => selected_invalid_message(field),
        code => format!("The {} field is invalid ({}).", display_name(field), code),
    }
}

/// Rejects empty and whitespace-only strings, the way a required string is
/// treated when it is present but has no content.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::validation::FieldErrors;

/// Message returned with every 422 response
pub const VALIDATION_FAILED_MESSAGE: &str = "The given data was invalid.";

/// Error body shared by every failing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    /// Per-field messages, present on validation failures only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            errors: Some(errors.into_inner()),
        }
    }
}

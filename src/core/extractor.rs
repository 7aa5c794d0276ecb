use axum::{
    body::Body,
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Request,
    },
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::error::AppError;
use crate::shared::validation::{invalid_type_message, FieldErrors};

/// Field key used when the payload is not a JSON object at all
pub const BODY_FIELD: &str = "body";

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(AppJsonRejection::Json)?;

        match serde_json::from_value::<T>(value.clone()) {
            Ok(payload) => Ok(Self(payload)),
            Err(err) => Err(AppJsonRejection::Fields(type_errors::<T>(&value, &err))),
        }
    }
}

/// Keys every top-level member that cannot be read on its own under its
/// field name. Request types only carry optional members, so a single-member
/// object deserializes unless that member's value has the wrong type.
fn type_errors<T: DeserializeOwned>(value: &Value, whole: &serde_json::Error) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Value::Object(members) = value {
        for (field, member) in members {
            let mut single = Map::new();
            single.insert(field.clone(), member.clone());
            if let Err(err) = serde_json::from_value::<T>(Value::Object(single)) {
                errors.add(field, invalid_type_message(field, &err));
            }
        }
    }

    if errors.is_empty() {
        errors.add(BODY_FIELD, invalid_type_message(BODY_FIELD, whole));
    }
    errors
}

pub enum AppJsonRejection {
    Json(JsonRejection),
    Fields(FieldErrors),
}

impl From<AppJsonRejection> for AppError {
    fn from(rejection: AppJsonRejection) -> Self {
        match rejection {
            AppJsonRejection::Fields(errors) => AppError::Validation(errors),
            AppJsonRejection::Json(JsonRejection::JsonSyntaxError(err)) => {
                AppError::BadRequest(format!("Invalid JSON syntax: {}", err))
            }
            AppJsonRejection::Json(JsonRejection::MissingJsonContentType(err)) => {
                AppError::BadRequest(format!("Missing JSON content type: {}", err))
            }
            AppJsonRejection::Json(_) => {
                AppError::BadRequest("Failed to parse JSON body".to_string())
            }
        }
    }
}

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

/// Path extractor whose rejections render as `ErrorResponse`. An id that
/// cannot be parsed names no record, so it is reported as not found.
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(PathRejection::FailedToDeserializePathParams(err)) => {
                tracing::debug!("Unparsable path parameter: {}", err.body_text());
                Err(AppError::NotFound("Resource not found".to_string()))
            }
            Err(rejection) => Err(AppError::Internal(rejection.body_text())),
        }
    }
}

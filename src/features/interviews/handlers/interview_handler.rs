use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppJsonRejection, AppPath};
use crate::features::interviews::dtos::{
    CreateInterviewDto, InterviewResponseDto, UpdateInterviewDto,
};
use crate::features::interviews::services::InterviewService;
use crate::shared::types::ErrorResponse;

/// List all interviews
#[utoipa::path(
    get,
    path = "/interview",
    responses(
        (status = 200, description = "List of interviews", body = Vec<InterviewResponseDto>),
    ),
    tag = "interviews"
)]
pub async fn list_interviews(
    State(service): State<Arc<InterviewService>>,
) -> Result<Json<Vec<InterviewResponseDto>>> {
    let interviews = service.list().await?;
    Ok(Json(interviews))
}

/// Create an interview
///
/// Fails validation when the slug is already used or the category does not exist.
#[utoipa::path(
    post,
    path = "/interview",
    request_body = CreateInterviewDto,
    responses(
        (status = 201, description = "Interview created", body = InterviewResponseDto),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "interviews"
)]
pub async fn create_interview(
    State(service): State<Arc<InterviewService>>,
    AppJson(dto): AppJson<CreateInterviewDto>,
) -> Result<(StatusCode, Json<InterviewResponseDto>)> {
    let interview = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(interview)))
}

/// Update an interview; only the supplied fields change
#[utoipa::path(
    put,
    path = "/interview/{id}",
    params(
        ("id" = i64, Path, description = "Interview ID")
    ),
    request_body = UpdateInterviewDto,
    responses(
        (status = 200, description = "Interview updated", body = InterviewResponseDto),
        (status = 404, description = "Interview not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "interviews"
)]
pub async fn update_interview(
    State(service): State<Arc<InterviewService>>,
    AppPath(id): AppPath<i64>,
    payload: std::result::Result<AppJson<UpdateInterviewDto>, AppJsonRejection>,
) -> Result<Json<InterviewResponseDto>> {
    // An unknown id is reported before anything about the body
    let dto = match payload {
        Ok(AppJson(dto)) => dto,
        Err(rejection) => {
            service.ensure_exists(id).await?;
            return Err(rejection.into());
        }
    };
    let interview = service.update(id, dto).await?;
    Ok(Json(interview))
}

#[utoipa::path(
    delete,
    path = "/interview/{id}",
    params(
        ("id" = i64, Path, description = "Interview ID")
    ),
    responses(
        (status = 204, description = "Interview deleted"),
        (status = 404, description = "Interview not found", body = ErrorResponse)
    ),
    tag = "interviews"
)]
pub async fn delete_interview(
    State(service): State<Arc<InterviewService>>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppJsonRejection, AppPath};
use crate::features::categories::dtos::{CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ErrorResponse;

/// List all categories
#[utoipa::path(
    get,
    path = "/category",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponseDto>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<Vec<CategoryResponseDto>>> {
    let categories = service.list().await?;
    Ok(Json(categories))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/category",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryResponseDto),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<CategoryResponseDto>)> {
    let category = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Update a category; only the supplied fields change
#[utoipa::path(
    put,
    path = "/category/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponseDto),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<i64>,
    payload: std::result::Result<AppJson<UpdateCategoryDto>, AppJsonRejection>,
) -> Result<Json<CategoryResponseDto>> {
    // An unknown id is reported before anything about the body
    let dto = match payload {
        Ok(AppJson(dto)) => dto,
        Err(rejection) => {
            service.ensure_exists(id).await?;
            return Err(rejection.into());
        }
    };
    let category = service.update(id, dto).await?;
    Ok(Json(category))
}

/// Delete a category and its interviews
#[utoipa::path(
    delete,
    path = "/category/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::interviews::{
    dtos as interviews_dtos, handlers as interviews_handlers, models as interviews_models,
};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Interviews
        interviews_handlers::list_interviews,
        interviews_handlers::create_interview,
        interviews_handlers::update_interview,
        interviews_handlers::delete_interview,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            // Interviews
            interviews_models::InterviewLevel,
            interviews_dtos::CreateInterviewDto,
            interviews_dtos::UpdateInterviewDto,
            interviews_dtos::InterviewResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Interview categories"),
        (name = "interviews", description = "Interviews grouped by category and level"),
    ),
    info(
        title = "Interview Catalog API",
        version = "0.1.0",
        description = "Categories and interviews",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::features::interviews::models::{
    Interview, InterviewChanges, InterviewLevel, NewInterview,
};
use crate::shared::validation::validate_not_blank;

/// `level` arrives as a plain string so that an unknown value is reported
/// against the `level` field.
fn validate_level(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<InterviewLevel>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("level"))
}

fn parse_level(value: Option<String>) -> Option<InterviewLevel> {
    value.and_then(|v| v.parse().ok())
}

// Create request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateInterviewDto {
    #[validate(
        required,
        length(max = 255),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "rust-ownership-basics", max_length = 255)]
    pub slug: Option<String>,

    #[validate(
        required,
        length(max = 255),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Rust ownership basics", max_length = 255)]
    pub title: Option<String>,

    #[validate(required, custom(function = "validate_not_blank"))]
    #[schema(example = "Borrowing, lifetimes and moves")]
    pub description: Option<String>,

    #[validate(required)]
    #[schema(example = 1)]
    pub category_id: Option<i64>,

    #[validate(required, custom(function = "validate_level"))]
    #[schema(value_type = Option<InterviewLevel>, example = "junior")]
    pub level: Option<String>,
}

impl CreateInterviewDto {
    /// Call only after `validate()` succeeded
    pub fn into_new_interview(self) -> Option<NewInterview> {
        Some(NewInterview {
            slug: self.slug?,
            title: self.title?,
            description: self.description?,
            category_id: self.category_id?,
            level: parse_level(self.level)?,
        })
    }
}

// Update request: every field is optional, absent fields are left untouched
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateInterviewDto {
    #[validate(length(max = 255), custom(function = "validate_not_blank"))]
    #[schema(example = "rust-ownership-advanced", max_length = 255)]
    pub slug: Option<String>,

    #[validate(length(max = 255), custom(function = "validate_not_blank"))]
    #[schema(max_length = 255)]
    pub title: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub description: Option<String>,

    pub category_id: Option<i64>,

    #[validate(custom(function = "validate_level"))]
    #[schema(value_type = Option<InterviewLevel>, example = "senior")]
    pub level: Option<String>,
}

impl From<UpdateInterviewDto> for InterviewChanges {
    fn from(dto: UpdateInterviewDto) -> Self {
        Self {
            slug: dto.slug,
            title: dto.title,
            description: dto.description,
            category_id: dto.category_id,
            level: parse_level(dto.level),
        }
    }
}

/// Response DTO for interview
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InterviewResponseDto {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category_id: i64,
    pub level: InterviewLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Interview> for InterviewResponseDto {
    fn from(i: Interview) -> Self {
        Self {
            id: i.id,
            slug: i.slug,
            title: i.title,
            description: i.description,
            category_id: i.category_id,
            level: i.level,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::{Category, CategoryChanges, NewCategory};
use crate::shared::validation::validate_not_blank;

// Create request. Fields are optional at the type level so that a missing
// field surfaces as a per-field validation error instead of a parse error.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(
        required,
        length(max = 255),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Backend", max_length = 255)]
    pub name: Option<String>,

    #[validate(required)]
    #[schema(example = true)]
    pub is_active: Option<bool>,
}

impl CreateCategoryDto {
    /// Call only after `validate()` succeeded
    pub fn into_new_category(self) -> NewCategory {
        NewCategory {
            name: self.name.unwrap_or_default(),
            is_active: self.is_active.unwrap_or_default(),
        }
    }
}

// Update request: every field is optional, absent fields are left untouched
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(max = 255), custom(function = "validate_not_blank"))]
    #[schema(example = "Systems programming", max_length = 255)]
    pub name: Option<String>,

    #[schema(example = false)]
    pub is_active: Option<bool>,
}

impl From<UpdateCategoryDto> for CategoryChanges {
    fn from(dto: UpdateCategoryDto) -> Self {
        Self {
            name: dto.name,
            is_active: dto.is_active,
        }
    }
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            is_active: c.is_active,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::FieldErrors;

    fn errors_of(dto: &impl Validate) -> FieldErrors {
        dto.validate().map(|_| FieldErrors::new()).unwrap_or_else(Into::into)
    }

    #[test]
    fn test_create_requires_both_fields() {
        let errors = errors_of(&CreateCategoryDto::default());
        assert!(errors.get("name").is_some());
        assert!(errors.get("is_active").is_some());
    }

    #[test]
    fn test_create_accepts_valid_input() {
        let dto = CreateCategoryDto {
            name: Some("Backend".to_string()),
            is_active: Some(false),
        };
        assert!(dto.validate().is_ok());

        let new = dto.into_new_category();
        assert_eq!(new.name, "Backend");
        assert!(!new.is_active);
    }

    #[test]
    fn test_create_name_length_limit() {
        let at_limit = CreateCategoryDto {
            name: Some("a".repeat(255)),
            is_active: Some(true),
        };
        assert!(at_limit.validate().is_ok());

        let over_limit = CreateCategoryDto {
            name: Some("a".repeat(256)),
            is_active: Some(true),
        };
        assert!(errors_of(&over_limit).get("name").is_some());
    }

    #[test]
    fn test_update_validates_only_supplied_fields() {
        assert!(UpdateCategoryDto::default().validate().is_ok());

        let dto = UpdateCategoryDto {
            name: Some(String::new()),
            is_active: None,
        };
        let errors = errors_of(&dto);
        assert!(errors.get("name").is_some());
        assert!(errors.get("is_active").is_none());
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let dto: CreateCategoryDto = serde_json::from_str(r#"{"name":"Backend"}"#).unwrap();
        assert_eq!(dto.name.as_deref(), Some("Backend"));
        assert!(dto.is_active.is_none());
    }
}

use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto};
use crate::features::categories::models::{Category, CategoryChanges};
use crate::features::categories::repositories::CategoryRepository;
use crate::shared::validation::FieldErrors;

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Category {} not found", id))
}

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// List every category
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repository.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Fails with not found when no category has this id
    pub async fn ensure_exists(&self, id: i64) -> Result<()> {
        self.find_or_fail(id).await.map(|_| ())
    }

    async fn find_or_fail(&self, id: i64) -> Result<Category> {
        self.repository.find(id).await?.ok_or_else(|| not_found(id))
    }

    /// Create a category from a complete payload
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        dto.validate().map_err(FieldErrors::from)?;

        let category = self.repository.insert(dto.into_new_category()).await?;
        tracing::info!("Category {} created", category.id);

        Ok(category.into())
    }

    /// Apply the supplied fields to an existing category
    pub async fn update(&self, id: i64, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let current = self.find_or_fail(id).await?;

        dto.validate().map_err(FieldErrors::from)?;

        let changes = CategoryChanges::from(dto);
        if changes.is_empty() {
            return Ok(current.into());
        }

        let category = self
            .repository
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::debug!("Category {} updated", id);

        Ok(category.into())
    }

    /// Delete a category together with its interviews
    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!("Category {} deleted", id);
        Ok(())
    }
}

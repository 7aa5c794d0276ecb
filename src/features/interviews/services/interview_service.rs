use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::repositories::CategoryRepository;
use crate::features::interviews::dtos::{
    CreateInterviewDto, InterviewResponseDto, UpdateInterviewDto,
};
use crate::features::interviews::models::{Interview, InterviewChanges};
use crate::features::interviews::repositories::InterviewRepository;
use crate::shared::validation::{selected_invalid_message, unique_message, FieldErrors};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Interview {} not found", id))
}

/// Service for interview operations
pub struct InterviewService {
    interviews: Arc<dyn InterviewRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl InterviewService {
    pub fn new(
        interviews: Arc<dyn InterviewRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            interviews,
            categories,
        }
    }

    /// List every interview
    pub async fn list(&self) -> Result<Vec<InterviewResponseDto>> {
        let interviews = self.interviews.list().await?;
        Ok(interviews.into_iter().map(Into::into).collect())
    }

    /// Fails with not found when no interview has this id
    pub async fn ensure_exists(&self, id: i64) -> Result<()> {
        self.find_or_fail(id).await.map(|_| ())
    }

    async fn find_or_fail(&self, id: i64) -> Result<Interview> {
        self.interviews.find(id).await?.ok_or_else(|| not_found(id))
    }

    /// Store-backed rules: slug uniqueness and category existence. Checks
    /// only run for fields that passed the declarative rules.
    async fn check_references(
        &self,
        errors: &mut FieldErrors,
        slug: Option<&str>,
        category_id: Option<i64>,
        except_id: Option<i64>,
    ) -> Result<()> {
        if let Some(slug) = slug {
            if errors.get("slug").is_none() && self.interviews.slug_taken(slug, except_id).await? {
                errors.add("slug", unique_message("slug"));
            }
        }

        if let Some(category_id) = category_id {
            if !self.categories.exists(category_id).await? {
                errors.add("category_id", selected_invalid_message("category_id"));
            }
        }

        Ok(())
    }

    /// Create an interview from a complete payload
    pub async fn create(&self, dto: CreateInterviewDto) -> Result<InterviewResponseDto> {
        let mut errors = dto
            .validate()
            .map(|_| FieldErrors::new())
            .unwrap_or_else(FieldErrors::from);
        self.check_references(&mut errors, dto.slug.as_deref(), dto.category_id, None)
            .await?;
        errors.into_result()?;

        let new = dto.into_new_interview().ok_or_else(|| {
            AppError::Internal("validated interview payload is incomplete".to_string())
        })?;
        let interview = self.interviews.insert(new).await?;
        tracing::info!(
            "Interview {} created in category {}",
            interview.id,
            interview.category_id
        );

        Ok(interview.into())
    }

    /// Apply the supplied fields to an existing interview
    pub async fn update(&self, id: i64, dto: UpdateInterviewDto) -> Result<InterviewResponseDto> {
        let current = self.find_or_fail(id).await?;

        let mut errors = dto
            .validate()
            .map(|_| FieldErrors::new())
            .unwrap_or_else(FieldErrors::from);
        self.check_references(&mut errors, dto.slug.as_deref(), dto.category_id, Some(id))
            .await?;
        errors.into_result()?;

        let changes = InterviewChanges::from(dto);
        if changes.is_empty() {
            return Ok(current.into());
        }

        let interview = self
            .interviews
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::debug!("Interview {} updated", id);

        Ok(interview.into())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.interviews.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!("Interview {} deleted", id);
        Ok(())
    }
}

use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::{sqlstate, FOREIGN_KEY_VIOLATION, UNIQUE_VIOLATION};
use crate::core::error::{AppError, Result};
use crate::features::interviews::models::{Interview, InterviewChanges, NewInterview};
use crate::shared::validation::{selected_invalid_message, unique_message};

/// Row-level storage for interviews
#[async_trait]
pub trait InterviewRepository: Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<Interview>>;
    async fn find(&self, id: i64) -> Result<Option<Interview>>;
    /// Whether another interview already uses `slug`, ignoring `except_id`
    async fn slug_taken(&self, slug: &str, except_id: Option<i64>) -> Result<bool>;
    async fn insert(&self, new: NewInterview) -> Result<Interview>;
    /// Returns `None` when no row has the given id
    async fn update(&self, id: i64, changes: InterviewChanges) -> Result<Option<Interview>>;
    /// Returns `false` when no row has the given id
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// Maps constraint violations that slipped past the boundary checks (a
/// concurrent writer got there first) onto the same field errors.
fn handle_db_error(e: sqlx::Error) -> AppError {
    match sqlstate(&e).as_deref() {
        Some(UNIQUE_VIOLATION) => AppError::field("slug", unique_message("slug")),
        Some(FOREIGN_KEY_VIOLATION) => {
            AppError::field("category_id", selected_invalid_message("category_id"))
        }
        _ => {
            tracing::error!("Interview query failed: {:?}", e);
            AppError::Database(e)
        }
    }
}

pub struct PgInterviewRepository {
    pool: PgPool,
}

impl PgInterviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InterviewRepository for PgInterviewRepository {
    async fn list(&self) -> Result<Vec<Interview>> {
        sqlx::query_as::<_, Interview>(
            r#"
            SELECT id, slug, title, description, category_id, level, created_at, updated_at
            FROM interviews
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn find(&self, id: i64) -> Result<Option<Interview>> {
        sqlx::query_as::<_, Interview>(
            r#"
            SELECT id, slug, title, description, category_id, level, created_at, updated_at
            FROM interviews
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn slug_taken(&self, slug: &str, except_id: Option<i64>) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM interviews
                WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(slug)
        .bind(except_id)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn insert(&self, new: NewInterview) -> Result<Interview> {
        sqlx::query_as::<_, Interview>(
            r#"
            INSERT INTO interviews (slug, title, description, category_id, level)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, slug, title, description, category_id, level, created_at, updated_at
            "#,
        )
        .bind(new.slug)
        .bind(new.title)
        .bind(new.description)
        .bind(new.category_id)
        .bind(new.level)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn update(&self, id: i64, changes: InterviewChanges) -> Result<Option<Interview>> {
        sqlx::query_as::<_, Interview>(
            r#"
            UPDATE interviews
            SET slug = COALESCE($1, slug),
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category_id = COALESCE($4, category_id),
                level = COALESCE($5, level),
                updated_at = NOW()
            WHERE id = $6
            RETURNING id, slug, title, description, category_id, level, created_at, updated_at
            "#,
        )
        .bind(changes.slug)
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.category_id)
        .bind(changes.level)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM interviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_pass_through() {
        assert!(matches!(
            handle_db_error(sqlx::Error::RowNotFound),
            AppError::Database(_)
        ));
    }
}

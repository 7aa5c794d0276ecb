use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryChanges, NewCategory};

/// Row-level storage for categories
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<Category>>;
    async fn find(&self, id: i64) -> Result<Option<Category>>;
    async fn exists(&self, id: i64) -> Result<bool>;
    async fn insert(&self, new: NewCategory) -> Result<Category>;
    /// Returns `None` when no row has the given id
    async fn update(&self, id: i64, changes: CategoryChanges) -> Result<Option<Category>>;
    /// Deletes the row and, through the foreign key, its interviews.
    /// Returns `false` when no row has the given id.
    async fn delete(&self, id: i64) -> Result<bool>;
}

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, is_active, created_at, updated_at
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find(&self, id: i64) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, is_active, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn insert(&self, new: NewCategory) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, is_active)
            VALUES ($1, $2)
            RETURNING id, name, is_active, created_at, updated_at
            "#,
        )
        .bind(new.name)
        .bind(new.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create category: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update(&self, id: i64, changes: CategoryChanges) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = COALESCE($1, name),
                is_active = COALESCE($2, is_active),
                updated_at = NOW()
            WHERE id = $3
            RETURNING id, name, is_active, created_at, updated_at
            "#,
        )
        .bind(changes.name)
        .bind(changes.is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update category {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

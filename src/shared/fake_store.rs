use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryChanges, NewCategory};
use crate::features::categories::repositories::CategoryRepository;
use crate::features::interviews::models::{Interview, InterviewChanges, NewInterview};
use crate::features::interviews::repositories::InterviewRepository;
use crate::shared::validation::{selected_invalid_message, unique_message};

#[derive(Default)]
struct FakeTables {
    categories: Vec<Category>,
    interviews: Vec<Interview>,
    next_category_id: i64,
    next_interview_id: i64,
}

impl FakeTables {
    fn category_exists(&self, id: i64) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    fn slug_taken(&self, slug: &str, except_id: Option<i64>) -> bool {
        self.interviews
            .iter()
            .any(|i| i.slug == slug && Some(i.id) != except_id)
    }
}

/// In-memory stand-in for PostgreSQL. Enforces the same foreign key,
/// cascade and slug uniqueness rules as the migrations.
#[derive(Default)]
pub struct FakeStore {
    tables: Mutex<FakeTables>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for FakeStore {
    async fn list(&self) -> Result<Vec<Category>> {
        Ok(self.tables.lock().await.categories.clone())
    }

    async fn find(&self, id: i64) -> Result<Option<Category>> {
        let tables = self.tables.lock().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        Ok(self.tables.lock().await.category_exists(id))
    }

    async fn insert(&self, new: NewCategory) -> Result<Category> {
        let mut tables = self.tables.lock().await;
        tables.next_category_id += 1;
        let now = Utc::now();
        let category = Category {
            id: tables.next_category_id,
            name: new.name,
            is_active: new.is_active,
            created_at: now,
            updated_at: now,
        };
        tables.categories.push(category.clone());
        Ok(category)
    }

    async fn update(&self, id: i64, changes: CategoryChanges) -> Result<Option<Category>> {
        let mut tables = self.tables.lock().await;
        let Some(category) = tables.categories.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        if let Some(name) = changes.name {
            category.name = name;
        }
        if let Some(is_active) = changes.is_active {
            category.is_active = is_active;
        }
        category.updated_at = Utc::now();
        Ok(Some(category.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut tables = self.tables.lock().await;
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        if tables.categories.len() == before {
            return Ok(false);
        }
        tables.interviews.retain(|i| i.category_id != id);
        Ok(true)
    }
}

#[async_trait]
impl InterviewRepository for FakeStore {
    async fn list(&self) -> Result<Vec<Interview>> {
        Ok(self.tables.lock().await.interviews.clone())
    }

    async fn find(&self, id: i64) -> Result<Option<Interview>> {
        let tables = self.tables.lock().await;
        Ok(tables.interviews.iter().find(|i| i.id == id).cloned())
    }

    async fn slug_taken(&self, slug: &str, except_id: Option<i64>) -> Result<bool> {
        Ok(self.tables.lock().await.slug_taken(slug, except_id))
    }

    async fn insert(&self, new: NewInterview) -> Result<Interview> {
        let mut tables = self.tables.lock().await;
        if !tables.category_exists(new.category_id) {
            return Err(AppError::field(
                "category_id",
                selected_invalid_message("category_id"),
            ));
        }
        if tables.slug_taken(&new.slug, None) {
            return Err(AppError::field("slug", unique_message("slug")));
        }

        tables.next_interview_id += 1;
        let now = Utc::now();
        let interview = Interview {
            id: tables.next_interview_id,
            slug: new.slug,
            title: new.title,
            description: new.description,
            category_id: new.category_id,
            level: new.level,
            created_at: now,
            updated_at: now,
        };
        tables.interviews.push(interview.clone());
        Ok(interview)
    }

    async fn update(&self, id: i64, changes: InterviewChanges) -> Result<Option<Interview>> {
        let mut tables = self.tables.lock().await;
        if let Some(category_id) = changes.category_id {
            if !tables.category_exists(category_id) {
                return Err(AppError::field(
                    "category_id",
                    selected_invalid_message("category_id"),
                ));
            }
        }
        if let Some(slug) = changes.slug.as_deref() {
            if tables.slug_taken(slug, Some(id)) {
                return Err(AppError::field("slug", unique_message("slug")));
            }
        }

        let Some(interview) = tables.interviews.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };
        if let Some(slug) = changes.slug {
            interview.slug = slug;
        }
        if let Some(title) = changes.title {
            interview.title = title;
        }
        if let Some(description) = changes.description {
            interview.description = description;
        }
        if let Some(category_id) = changes.category_id {
            interview.category_id = category_id;
        }
        if let Some(level) = changes.level {
            interview.level = level;
        }
        interview.updated_at = Utc::now();
        Ok(Some(interview.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut tables = self.tables.lock().await;
        let before = tables.interviews.len();
        tables.interviews.retain(|i| i.id != id);
        Ok(tables.interviews.len() != before)
    }
}

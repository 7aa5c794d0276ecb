use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for category
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated values for a new category row
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub is_active: bool,
}

/// Columns to change on an existing category; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct CategoryChanges {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

impl CategoryChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.is_active.is_none()
    }
}

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Interview level enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "interview_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InterviewLevel {
    Junior,
    Middle,
    Senior,
}

impl InterviewLevel {
    pub const ALL: [InterviewLevel; 3] = [
        InterviewLevel::Junior,
        InterviewLevel::Middle,
        InterviewLevel::Senior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewLevel::Junior => "junior",
            InterviewLevel::Middle => "middle",
            InterviewLevel::Senior => "senior",
        }
    }
}

impl std::fmt::Display for InterviewLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("unknown interview level '{}'", s))
    }
}

/// Database model for interview
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Interview {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category_id: i64,
    pub level: InterviewLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated values for a new interview row
#[derive(Debug, Clone)]
pub struct NewInterview {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category_id: i64,
    pub level: InterviewLevel,
}

/// Columns to change on an existing interview; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct InterviewChanges {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub level: Option<InterviewLevel>,
}

impl InterviewChanges {
    pub fn is_empty(&self) -> bool {
        self.slug.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.category_id.is_none()
            && self.level.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parses_lowercase_names_only() {
        assert_eq!("junior".parse::<InterviewLevel>(), Ok(InterviewLevel::Junior));
        assert_eq!("middle".parse::<InterviewLevel>(), Ok(InterviewLevel::Middle));
        assert_eq!("senior".parse::<InterviewLevel>(), Ok(InterviewLevel::Senior));
        assert!("Senior".parse::<InterviewLevel>().is_err());
        assert!("lead".parse::<InterviewLevel>().is_err());
    }

    #[test]
    fn test_level_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(InterviewLevel::Middle).unwrap(),
            serde_json::json!("middle")
        );
    }
}

use crate::domain::DomainError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on the number of posts returned by a single page.
pub const MAX_PAGE_SIZE: i64 = 10;

const SNIPPET_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// First characters of a post body, counted in chars so multi-byte text is never split.
pub fn snippet(text: &str) -> String {
    text.chars().take(SNIPPET_LENGTH).collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePostRequest {
    pub id: i64,
    pub title: String,
    pub text: String,
}

impl CreatePostRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_content(&self.title, &self.text)
    }
}

impl UpdatePostRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_content(&self.title, &self.text)
    }
}

fn validate_content(title: &str, text: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::ValidationError(
            "Title cannot be empty".to_string(),
        ));
    }
    if text.trim().is_empty() {
        return Err(DomainError::ValidationError(
            "Text cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// A page request against the feed, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageQuery {
    Latest { limit: i64 },
    Before { cursor: DateTime<Utc>, limit: i64 },
}

impl PageQuery {
    /// Builds a query from raw GraphQL arguments. The limit is clamped to
    /// `1..=MAX_PAGE_SIZE`; a blank cursor means "start from the newest post".
    pub fn new(limit: i64, cursor: Option<&str>) -> Result<Self, DomainError> {
        let limit = limit.clamp(1, MAX_PAGE_SIZE);

        match cursor.map(str::trim) {
            None | Some("") => Ok(Self::Latest { limit }),
            Some(raw) => Ok(Self::Before {
                cursor: parse_cursor(raw)?,
                limit,
            }),
        }
    }

    pub fn limit(&self) -> i64 {
        match self {
            Self::Latest { limit } | Self::Before { limit, .. } => *limit,
        }
    }

    pub fn cursor(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Latest { .. } => None,
            Self::Before { cursor, .. } => Some(*cursor),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedPosts {
    pub total_count: i64,
    pub cursor: Option<DateTime<Utc>>,
    pub has_more: bool,
    pub posts: Vec<Post>,
}

impl PaginatedPosts {
    pub fn empty(total_count: i64) -> Self {
        Self {
            total_count,
            cursor: None,
            has_more: false,
            posts: Vec::new(),
        }
    }
}

pub fn parse_cursor(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::ValidationError(format!("Invalid cursor '{}': {}", raw, e)))
}

/// Cursors carry microsecond precision, matching what PostgreSQL stores.
pub fn format_cursor(cursor: DateTime<Utc>) -> String {
    cursor.to_rfc3339_opts(SecondsFormat::Micros, true)
}

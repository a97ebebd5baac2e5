use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner of posts. Credentials live in the same table but are never loaded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

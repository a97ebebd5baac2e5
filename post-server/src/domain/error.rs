use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Codes follow the mutation response convention, not HTTP semantics:
    /// a missing post is reported as 400.
    pub fn to_status_code(&self) -> u16 {
        match self {
            Self::PostNotFound | Self::ValidationError(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::DatabaseError(_) => 500,
        }
    }

    pub fn is_unexpected(&self) -> bool {
        self.to_status_code() >= 500
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        Self::DatabaseError(err.to_string())
    }
}

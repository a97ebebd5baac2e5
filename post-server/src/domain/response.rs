use crate::domain::{DomainError, Post};

/// Uniform reply for every post mutation. Domain failures are reported here
/// instead of being raised as GraphQL errors.
#[derive(Debug, Clone)]
pub struct PostMutationResponse {
    pub code: u16,
    pub success: bool,
    pub message: String,
    pub post: Option<Post>,
}

impl PostMutationResponse {
    pub fn ok(message: impl Into<String>, post: Post) -> Self {
        Self {
            code: 200,
            success: true,
            message: message.into(),
            post: Some(post),
        }
    }

    pub fn from_error(err: DomainError) -> Self {
        let code = err.to_status_code();
        let message = if err.is_unexpected() {
            format!("Internal server error: {}", err)
        } else {
            err.to_string()
        };

        Self {
            code,
            success: false,
            message,
            post: None,
        }
    }

    pub fn from_result(result: Result<Post, DomainError>, message: &str) -> Self {
        match result {
            Ok(post) => Self::ok(message, post),
            Err(err) => {
                if err.is_unexpected() {
                    tracing::error!("Post mutation failed: {}", err);
                }
                Self::from_error(err)
            }
        }
    }
}

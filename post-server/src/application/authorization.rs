use crate::domain::DomainError;

pub const NOT_OWNER_MESSAGE: &str = "You do not have permission to modify this post";

/// Checks that `caller_id` is the owner of a resource. An anonymous caller
/// never owns anything.
pub fn ensure_owner(owner_id: i64, caller_id: Option<i64>) -> Result<(), DomainError> {
    match caller_id {
        Some(caller_id) if caller_id == owner_id => Ok(()),
        _ => Err(DomainError::Unauthorized(NOT_OWNER_MESSAGE.to_string())),
    }
}

/// Resolves the session user or fails with 401.
pub fn require_caller(caller_id: Option<i64>) -> Result<i64, DomainError> {
    caller_id.ok_or_else(|| DomainError::Unauthorized("User not authenticated".to_string()))
}

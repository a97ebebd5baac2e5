use crate::infrastructure::jwt::JwtService;

/// Per-request caller identity, attached to every GraphQL request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<i64>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// A missing or invalid bearer token yields an anonymous session rather
    /// than rejecting the request; individual fields decide whether they need a user.
    pub fn from_bearer(jwt_service: &JwtService, token: Option<&str>) -> Self {
        match token.map(|token| jwt_service.verify_token(token)) {
            Some(Ok(user_id)) => Self::authenticated(user_id),
            Some(Err(err)) => {
                tracing::debug!("Ignoring bearer token: {}", err);
                Self::anonymous()
            }
            None => Self::anonymous(),
        }
    }
}

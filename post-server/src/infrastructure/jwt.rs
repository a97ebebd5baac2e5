use crate::domain::DomainError;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by session tokens. Only `user_id` is consumed here;
/// tokens are issued by the authentication service.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub exp: usize,
}

pub struct JwtService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        if secret.len() < 32 {
            tracing::warn!(
                "JWT secret is too short ({} chars). Minimum recommended is 32 chars.",
                secret.len()
            );
        }

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }

    pub fn verify_token(&self, token: &str) -> Result<i64, DomainError> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(token_data) => {
                tracing::debug!("Token verified for user_id: {}", token_data.claims.user_id);
                Ok(token_data.claims.user_id)
            }
            Err(e) => {
                tracing::debug!("Token verification failed: {}", e);
                Err(DomainError::Unauthorized(format!("Invalid token: {}", e)))
            }
        }
    }
}

#[cfg(test)]
pub fn issue_test_token(secret: &str, user_id: i64) -> String {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    let claims = Claims {
        user_id,
        exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

//! Bearer-token claims
//!
//! Token issuance lives in the identity service; this server only verifies
//! tokens and reads the owning user id out of them.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// JWT claims carried by the `Authorization: Bearer` header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity of the calling user; owner reference for every record
    pub user_id: i32,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Build claims for a user with the given validity window
    pub fn for_user(user_id: i32, expiration_hours: u64) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            iat: now.timestamp(),
            exp: (now + Duration::hours(expiration_hours as i64)).timestamp(),
        }
    }

    /// Create a signed JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and verify a JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        let claims = Claims::for_user(42, 24);
        let token = claims.create_token("test-secret").unwrap();
        let parsed = Claims::from_token(&token, "test-secret").unwrap();
        assert_eq!(parsed.user_id, 42);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let claims = Claims::for_user(42, 24);
        let token = claims.create_token("test-secret").unwrap();
        assert!(Claims::from_token(&token, "other-secret").is_err());
    }
}

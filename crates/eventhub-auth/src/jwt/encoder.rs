//! JWT token creation with configurable signing and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use eventhub_core::config::AuthConfig;
use eventhub_core::error::AppError;
use eventhub_entity::user::UserRole;

use super::claims::Claims;

/// Creates signed JWT tokens carrying `{id, role}`.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in hours.
    token_ttl_hours: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_hours: config.token_ttl_hours as i64,
        }
    }

    /// Generates a signed token for the given user and role.
    pub fn generate_token(&self, user_id: Uuid, role: UserRole) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::hours(self.token_ttl_hours);

        let claims = Claims {
            sub: user_id,
            role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::decoder::JwtDecoder;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            token_ttl_hours: 24,
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let user_id = Uuid::new_v4();
        let token = encoder
            .generate_token(user_id, UserRole::Organizer)
            .expect("encode");
        let claims = decoder.decode_token(&token).expect("decode");

        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.role, UserRole::Organizer);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let encoder = JwtEncoder::new(&test_config());
        let other = AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..test_config()
        };
        let decoder = JwtDecoder::new(&other);

        let token = encoder
            .generate_token(Uuid::new_v4(), UserRole::Participant)
            .expect("encode");
        assert!(decoder.decode_token(&token).is_err());
    }
}

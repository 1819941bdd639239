//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use eventhub_core::config::AuthConfig;
use eventhub_core::error::AppError;

use super::claims::Claims;

/// Validates JWT tokens presented on incoming requests.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Checks signature validity and expiration. Any failure is reported
    /// as an invalid-token error, independent of the requested action.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::invalid_token("Token has expired")
                    }
                    _ => AppError::invalid_token("Invalid token"),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_token_rejected() {
        let config = AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            token_ttl_hours: 24,
        };
        let decoder = JwtDecoder::new(&config);

        let err = decoder.decode_token("not.a.jwt").unwrap_err();
        assert_eq!(err.kind, eventhub_core::error::ErrorKind::InvalidToken);
    }
}

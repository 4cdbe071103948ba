//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use habitflow_core::config::auth::AuthConfig;
use habitflow_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Validates JWT tokens.
///
/// Revocation is handled at the session layer: every authenticated
/// request checks the token's session row, so a revoked session
/// invalidates its tokens without a separate blocklist.
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

    /// Decodes and validates an access token string.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Access {
            return Err(AppError::authentication(
                "Invalid token type: expected access token",
            ));
        }

        Ok(claims)
    }

    /// Decodes and validates a refresh token string.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Refresh {
            return Err(AppError::authentication(
                "Invalid token type: expected refresh token",
            ));
        }

        Ok(claims)
    }

    /// Internal decode without type checking.
    fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use habitflow_core::config::auth::AuthConfig;
    use uuid::Uuid;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            jwt_access_ttl_minutes: 15,
            jwt_refresh_ttl_hours: 24,
            password_min_length: 8,
            password_min_score: 2,
            require_email_verification: true,
        }
    }

    #[test]
    fn test_access_token_roundtrip() {
        let config = config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let user_id = Uuid::new_v4();
        let session_id = Uuid::new_v4();
        let pair = encoder
            .generate_token_pair(user_id, session_id, "minh")
            .unwrap();

        let claims = decoder.decode_access_token(&pair.access_token).unwrap();
        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.session_id(), session_id);
        assert_eq!(claims.username, "minh");
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let config = config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let pair = encoder
            .generate_token_pair(Uuid::new_v4(), Uuid::new_v4(), "minh")
            .unwrap();

        assert!(decoder.decode_access_token(&pair.refresh_token).is_err());

        let claims = decoder.decode_refresh_token(&pair.refresh_token).unwrap();
        assert_eq!(claims.jti, pair.refresh_jti);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let config = config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..config.clone()
        });

        let pair = encoder
            .generate_token_pair(Uuid::new_v4(), Uuid::new_v4(), "minh")
            .unwrap();

        assert!(decoder.decode_access_token(&pair.access_token).is_err());
    }
}

//! JWT (JSON Web Token) handling for API sessions

use campus_db::entities::user::UserRole;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session lifetime issued by login.
pub const SESSION_TTL_HOURS: i64 = 2;

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JwtClaims {
    /// Subject (user id)
    pub sub: i32,
    /// User email
    pub email: String,
    /// User role, resolved once here and never string-compared downstream
    pub role: UserRole,
    /// Issued at (timestamp)
    pub iat: i64,
    /// Expiration time (timestamp)
    pub exp: i64,
}

impl JwtClaims {
    pub fn new(user_id: i32, email: String, role: UserRole, validity: Duration) -> Self {
        let now = Utc::now();
        let exp = now + validity;

        Self {
            sub: user_id,
            email,
            role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    /// Session claims with the standard two-hour lifetime.
    pub fn session(user_id: i32, email: String, role: UserRole) -> Self {
        Self::new(user_id, email, role, Duration::hours(SESSION_TTL_HOURS))
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// JWT errors
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT encoding error: {0}")]
    EncodingError(#[from] jsonwebtoken::errors::Error),

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,
}

/// JWT validator
///
/// Validates signature and expiration only; there is no issuer or audience
/// in the session token scheme.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Create a new JWT validator using HMAC-SHA256 (symmetric secret)
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.validate_nbf = false;
        // Claims beyond exp are application data, not validated here
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn validate(&self, token: &str) -> Result<JwtClaims, JwtError> {
        let token_data = decode::<JwtClaims>(token, &self.decoding_key, &self.validation)?;

        if token_data.claims.is_expired() {
            return Err(JwtError::TokenExpired);
        }

        Ok(token_data.claims)
    }

    /// Encode JWT using HMAC-SHA256 (symmetric secret)
    pub fn encode(secret: &[u8], claims: &JwtClaims) -> Result<String, JwtError> {
        let header = Header::new(Algorithm::HS256);
        let encoding_key = EncodingKey::from_secret(secret);

        Ok(encode(&header, claims, &encoding_key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &[u8] = b"test_secret_key_1234567890";

    #[test]
    fn test_jwt_encode_decode() {
        let claims = JwtClaims::session(42, "curator@example.com".to_string(), UserRole::Curator);

        let token = JwtValidator::encode(TEST_SECRET, &claims).unwrap();
        let decoded = JwtValidator::new(TEST_SECRET).validate(&token).unwrap();

        assert_eq!(decoded.sub, 42);
        assert_eq!(decoded.email, "curator@example.com");
        assert_eq!(decoded.role, UserRole::Curator);
    }

    #[test]
    fn test_session_expiry_is_two_hours() {
        let claims = JwtClaims::session(1, "a@b.c".to_string(), UserRole::Administrator);
        let lifetime = claims.exp - claims.iat;
        assert_eq!(lifetime, SESSION_TTL_HOURS * 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let claims = JwtClaims::new(
            7,
            "old@example.com".to_string(),
            UserRole::Curator,
            Duration::seconds(-10), // Already expired
        );

        assert!(claims.is_expired());

        let token = JwtValidator::encode(TEST_SECRET, &claims).unwrap();
        let result = JwtValidator::new(TEST_SECRET).validate(&token);

        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let claims = JwtClaims::session(7, "x@example.com".to_string(), UserRole::Curator);
        let token = JwtValidator::encode(b"other-secret", &claims).unwrap();

        assert!(JwtValidator::new(TEST_SECRET).validate(&token).is_err());
    }

    #[test]
    fn test_role_serializes_as_lowercase_string() {
        let claims = JwtClaims::session(1, "a@b.c".to_string(), UserRole::Administrator);
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"role\":\"administrator\""));
    }
}

//! Authentication for the campus events backend
//!
//! Session JWTs (HS256, two-hour expiry) and Argon2id password hashing.

pub mod jwt;
pub mod password;

pub use jwt::{JwtClaims, JwtError, JwtValidator, SESSION_TTL_HOURS};
pub use password::{hash_password, verify_password, PasswordError};

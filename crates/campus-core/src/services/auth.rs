//! Registration, login and session issuance
//!
//! Registration is open and always produces a curator account; administrator
//! accounts are promoted through the user administration endpoints.

use campus_auth::jwt::{JwtClaims, JwtValidator};
use campus_auth::password::{hash_password, verify_password, MIN_PASSWORD_LEN};
use campus_db::entities::{prelude::*, user, user::UserRole};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::info;

use crate::error::{CoreError, FieldError};
use crate::scope::Principal;

#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub position: Option<String>,
}

/// Issued session: the token plus the account it belongs to
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: user::Model,
}

pub async fn register(
    db: &DatabaseConnection,
    input: RegisterInput,
) -> Result<user::Model, CoreError> {
    let mut errors = Vec::new();
    if input.email.trim().is_empty() || !input.email.contains('@') {
        errors.push(FieldError::new("email", "a valid email is required"));
    }
    if input.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            format!("password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    if input.full_name.trim().is_empty() {
        errors.push(FieldError::new("fullName", "full name must not be empty"));
    }
    if !errors.is_empty() {
        return Err(CoreError::validation_fields("registration failed", errors));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| CoreError::Internal(format!("password hashing failed: {e}")))?;

    let now = Utc::now();
    let user = user::ActiveModel {
        email: Set(input.email.trim().to_ascii_lowercase()),
        password_hash: Set(password_hash),
        full_name: Set(input.full_name),
        phone: Set(input.phone),
        position: Set(input.position),
        // Self-registration never grants elevated access
        role: Set(UserRole::Curator),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| CoreError::on_unique(e, "email already registered"))?;

    info!(user_id = user.id, "user registered");
    Ok(user)
}

pub async fn login(
    db: &DatabaseConnection,
    jwt_secret: &[u8],
    email: &str,
    password: &str,
) -> Result<Session, CoreError> {
    let user = User::find()
        .filter(user::Column::Email.eq(email.trim().to_ascii_lowercase()))
        .one(db)
        .await?
        .ok_or_else(|| CoreError::Unauthorized("invalid email or password".to_string()))?;

    let matches = verify_password(password, &user.password_hash)
        .map_err(|e| CoreError::Internal(format!("password verification failed: {e}")))?;
    if !matches {
        return Err(CoreError::Unauthorized(
            "invalid email or password".to_string(),
        ));
    }
    if !user.is_active {
        return Err(CoreError::Unauthorized("account is deactivated".to_string()));
    }

    let claims = JwtClaims::session(user.id, user.email.clone(), user.role);
    let token = JwtValidator::encode(jwt_secret, &claims)
        .map_err(|e| CoreError::Internal(format!("token issuance failed: {e}")))?;

    info!(user_id = user.id, "login");
    Ok(Session { token, user })
}

/// Current principal's own profile.
pub async fn me(db: &DatabaseConnection, principal: &Principal) -> Result<user::Model, CoreError> {
    User::find_by_id(principal.id)
        .one(db)
        .await?
        .ok_or_else(|| CoreError::Unauthorized("account no longer exists".to_string()))
}

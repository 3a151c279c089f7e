//! Error taxonomy shared by every service
//!
//! The HTTP layer maps these one-to-one onto status codes; nothing below
//! the API boundary ever inspects message strings.

use sea_orm::{DbErr, TransactionError};
use thiserror::Error;

/// Per-field detail attached to validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed, missing or out-of-range input (HTTP 400)
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    /// Missing or invalid credentials (HTTP 401)
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but not allowed to touch this row or action (HTTP 403)
    #[error("{0}")]
    Forbidden(String),

    /// Referenced id does not resolve (HTTP 404)
    #[error("{0}")]
    NotFound(String),

    /// Unique-constraint violation surfaced from the store (HTTP 409)
    #[error("{0}")]
    Conflict(String),

    /// Unexpected failure (HTTP 500); detail is logged, never returned
    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn validation_fields(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        CoreError::Validation {
            message: message.into(),
            errors,
        }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        CoreError::NotFound(what.into())
    }

    pub fn forbidden(why: impl Into<String>) -> Self {
        CoreError::Forbidden(why.into())
    }

    /// Re-map a store error to `Conflict` when it is a unique-key violation.
    ///
    /// SQLite reports "UNIQUE constraint failed", PostgreSQL "duplicate key
    /// value violates unique constraint"; both carry "unique" somewhere.
    pub fn on_unique(err: DbErr, conflict_message: &str) -> Self {
        let text = err.to_string();
        if text.to_ascii_lowercase().contains("unique") {
            CoreError::Conflict(conflict_message.to_string())
        } else {
            CoreError::Database(err)
        }
    }
}

impl From<TransactionError<CoreError>> for CoreError {
    fn from(err: TransactionError<CoreError>) -> Self {
        match err {
            TransactionError::Connection(db) => CoreError::Database(db),
            TransactionError::Transaction(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_becomes_conflict() {
        let err = DbErr::Custom("UNIQUE constraint failed: users.email".to_string());
        let mapped = CoreError::on_unique(err, "email already registered");
        assert!(matches!(mapped, CoreError::Conflict(_)));
    }

    #[test]
    fn other_db_errors_pass_through() {
        let err = DbErr::Custom("connection reset".to_string());
        let mapped = CoreError::on_unique(err, "email already registered");
        assert!(matches!(mapped, CoreError::Database(_)));
    }
}

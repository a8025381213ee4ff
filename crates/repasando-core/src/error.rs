//! Unified error types for all layers of the application.

use std::collections::BTreeMap;
use std::fmt::Debug;
use thiserror::Error;

/// Field name (JSON spelling) to the first rule it violated.
pub type FieldErrors = BTreeMap<String, String>;

/// Message carried by [`RepasandoError::DuplicateField`].
pub const DUPLICATE_FIELD_MESSAGE: &str = "email or username already in use";

/// Unified error type for all layers of Repasando.
#[derive(Error, Debug)]
pub enum RepasandoError {
    // ============ Domain Errors ============
    /// One or more payload fields broke a validation rule.
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// A save would duplicate a unique value (email or username).
    #[error("{0}")]
    DuplicateField(String),

    /// Resource not found
    #[error("{resource_type} not found for id: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Requested page parameters are out of range.
    #[error("{0}")]
    InvalidPage(String),

    // ============ Infrastructure Errors ============
    /// The store rejected a row because of a unique constraint.
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepasandoError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::DuplicateField(_) | Self::UniqueViolation(_) => "DUPLICATE_FIELD",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidPage(_) => "INVALID_PAGE",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates the duplicate email/username error.
    #[must_use]
    pub fn duplicate_field() -> Self {
        Self::DuplicateField(DUPLICATE_FIELD_MESSAGE.to_string())
    }

    /// Creates an invalid page error.
    #[must_use]
    pub fn invalid_page<T: Into<String>>(message: T) -> Self {
        Self::InvalidPage(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for RepasandoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                tracing::debug!("Unique constraint violation: {}", db_err.message());
                Self::UniqueViolation(db_err.message().to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RepasandoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

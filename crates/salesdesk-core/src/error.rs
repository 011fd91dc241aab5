//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all layers of SalesDesk.
///
/// This enum covers domain, persistence, and configuration failures so
/// that every layer reports through a single taxonomy.
#[derive(Error, Debug)]
pub enum SalesDeskError {
    // ============ Domain Errors ============
    /// Entity not found
    #[error("{entity} not found: id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Validation error carrying one message per rejected field
    #[error("Validation error: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    // ============ Infrastructure Errors ============
    /// Write rejected by a relational integrity constraint
    #[error("Integrity constraint violation: {0}")]
    IntegrityConstraint(String),

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

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SalesDeskError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::IntegrityConstraint(_) => "INTEGRITY_CONSTRAINT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for an entity.
    #[must_use]
    pub fn not_found<T: ToString>(entity: &'static str, id: T) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Creates a validation error from accumulated field violations.
    #[must_use]
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }

    /// Creates an integrity constraint error.
    #[must_use]
    pub fn integrity_constraint<T: Into<String>>(message: T) -> Self {
        Self::IntegrityConstraint(message.into())
    }

    /// Creates a database error.
    #[must_use]
    pub fn database<T: Into<String>>(message: T) -> Self {
        Self::Database(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the field violations when this is a validation error.
    #[must_use]
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for SalesDeskError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                entity: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => {
                if db_err.is_foreign_key_violation() || db_err.is_unique_violation() {
                    return Self::IntegrityConstraint(db_err.message().to_string());
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for SalesDeskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name as shown on the form
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl FieldError {
    /// Creates a new field error.
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SalesDeskError::not_found("Department", 1).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            SalesDeskError::validation(vec![]).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            SalesDeskError::integrity_constraint("fk").error_code(),
            "INTEGRITY_CONSTRAINT"
        );
        assert_eq!(
            SalesDeskError::database("boom").error_code(),
            "DATABASE_ERROR"
        );
        assert_eq!(
            SalesDeskError::configuration("missing url").error_code(),
            "CONFIGURATION_ERROR"
        );
        assert_eq!(
            SalesDeskError::internal("bug").error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = SalesDeskError::not_found("Seller", 42);
        assert_eq!(err.to_string(), "Seller not found: id 42");
    }

    #[test]
    fn test_validation_display_lists_every_field() {
        let err = SalesDeskError::validation(vec![
            FieldError::new("name", "Field can't be empty", "required"),
            FieldError::new("email", "Field can't be empty", "required"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation error: name: Field can't be empty; email: Field can't be empty"
        );
    }

    #[test]
    fn test_anyhow_errors_are_internal() {
        let err = SalesDeskError::from(anyhow::anyhow!("driver gave up"));
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        assert_eq!(err.to_string(), "driver gave up");
    }

    #[test]
    fn test_field_errors_accessor() {
        let err = SalesDeskError::validation(vec![FieldError::new(
            "baseSalary",
            "Field can't be empty",
            "required",
        )]);
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, "baseSalary");

        assert!(SalesDeskError::database("x").field_errors().is_none());
    }
}

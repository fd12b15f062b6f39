//! Calc Error Types
//!
//! Calculation-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Calc-specific result type alias
pub type CalcResult<T> = Result<T, CalcError>;

/// Calc-specific error variants
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// Operation name did not match any known variant
    #[error("Unknown operation type: {0}")]
    UnknownOperationType(String),

    /// Operands are not a well-formed numeric sequence
    #[error("Inputs must be a list")]
    InvalidInputs,

    /// Operand count does not satisfy the operation's arity rule
    #[error("{0}")]
    Arity(String),

    /// Division by zero
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Calculation not found (or owned by someone else)
    #[error("Calculation not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CalcError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CalcError::UnknownOperationType(_)
            | CalcError::InvalidInputs
            | CalcError::Arity(_)
            | CalcError::DivisionByZero => StatusCode::UNPROCESSABLE_ENTITY,
            CalcError::NotFound => StatusCode::NOT_FOUND,
            CalcError::Database(_) | CalcError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::UnknownOperationType(_)
            | CalcError::InvalidInputs
            | CalcError::Arity(_)
            | CalcError::DivisionByZero => ErrorKind::UnprocessableEntity,
            CalcError::NotFound => ErrorKind::NotFound,
            CalcError::Database(_) | CalcError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CalcError::Database(e) => {
                tracing::error!(error = %e, "Calc database error");
            }
            CalcError::Internal(msg) => {
                tracing::error!(message = %msg, "Calc internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Calc error");
            }
        }
    }
}

impl IntoResponse for CalcError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<sqlx::Error> for CalcError {
    fn from(err: sqlx::Error) -> Self {
        CalcError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_unprocessable() {
        assert_eq!(
            CalcError::UnknownOperationType("modulo".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            CalcError::InvalidInputs.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            CalcError::DivisionByZero.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_messages_match_wire_contract() {
        assert_eq!(
            CalcError::DivisionByZero.to_string(),
            "Cannot divide by zero"
        );
        assert_eq!(CalcError::InvalidInputs.to_string(), "Inputs must be a list");
        assert_eq!(CalcError::NotFound.to_string(), "Calculation not found");
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(CalcError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(CalcError::NotFound.kind(), ErrorKind::NotFound);
    }
}

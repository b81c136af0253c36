use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

/// Which stored-record constraint a write broke
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Field '{0}' is required")]
    Required(&'static str),

    #[error("{0}")]
    Duplicate(String),
}

#[derive(Debug, Error)]
pub enum CompanyError {
    #[error("Company not found: {0}")]
    NotFound(i64),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(Violation),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Field '{field}' encodes to {length} characters, capacity is {capacity}")]
    CapacityExceeded {
        field: &'static str,
        length: usize,
        capacity: usize,
    },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CompanyResult<T> = Result<T, CompanyError>;

impl From<DbErr> for CompanyError {
    fn from(err: DbErr) -> Self {
        CompanyError::Database(err.to_string())
    }
}

/// Convert CompanyError to AppError for standardized error responses
impl From<CompanyError> for AppError {
    fn from(err: CompanyError) -> Self {
        match err {
            CompanyError::NotFound(id) => AppError::NotFound(format!("Company {} not found", id)),
            CompanyError::ConstraintViolation(Violation::Duplicate(msg)) => AppError::Conflict(msg),
            CompanyError::ConstraintViolation(violation @ Violation::Required(_)) => {
                AppError::BadRequest(violation.to_string())
            }
            CompanyError::Validation(msg) => AppError::BadRequest(msg),
            err @ CompanyError::CapacityExceeded { .. } => {
                AppError::CapacityExceeded(err.to_string())
            }
            CompanyError::Database(msg) => AppError::Database(msg),
            CompanyError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CompanyError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

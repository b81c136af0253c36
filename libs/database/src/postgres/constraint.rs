use sea_orm::{DbErr, SqlErr};

/// Detail message of a unique-constraint violation, if `err` is one.
///
/// Repositories use this to turn a duplicate key into a conflict instead of
/// a generic database failure.
pub fn unique_violation(err: &DbErr) -> Option<String> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => Some(detail),
        _ => None,
    }
}

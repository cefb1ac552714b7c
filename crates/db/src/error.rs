//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("row not found")]
    NotFound,

    /// A write collided with a UNIQUE constraint.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl DbError {
    /// Classify a write error, splitting unique-constraint failures out of
    /// the generic `Sqlx` bucket.
    pub(crate) fn from_write(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err)
                if db_err.is_unique_violation()
                    || db_err.message().starts_with("UNIQUE constraint failed") =>
            {
                Self::UniqueViolation(db_err.message().to_string())
            }
            other => Self::Sqlx(other),
        }
    }
}

//! Registrar-level error types.

use thiserror::Error;

/// Errors produced by the signup operations.
///
/// The `Display` text of the validation variants is what the HTTP layer sends
/// back to the student, so it is part of the public contract.
#[derive(Debug, Error)]
pub enum RegistrarError {
    // ------ Validation errors ------

    /// The referenced activity does not exist.
    #[error("Activity not found")]
    ActivityNotFound,

    /// The student already holds a registration for the activity.
    #[error("Student is already signed up")]
    AlreadySignedUp,

    /// Every seat of the activity is taken.
    #[error("Activity is full")]
    ActivityFull,

    /// Unregister target has no registration for the activity.
    #[error("Student is not signed up for this activity")]
    NotRegistered,

    // ------ Storage errors ------

    /// Persistence error from the db crate.
    #[error("database error: {0}")]
    Database(#[from] db::DbError),
}

impl RegistrarError {
    /// `true` for failures caused by the request itself rather than the store.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Database(_))
    }
}

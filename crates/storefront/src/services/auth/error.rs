//! Authentication error types.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] demo_smoke_core::EmailError),

    /// An account with this email already exists.
    #[error("user already exists")]
    UserAlreadyExists,

    /// No account matches.
    #[error("user not found")]
    UserNotFound,

    /// The operation needs a signed-in user.
    #[error("not signed in")]
    NotSignedIn,

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

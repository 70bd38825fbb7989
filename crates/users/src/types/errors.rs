//! Error types for the users domain.

use gymcheck_auth::AuthError;
use gymcheck_database::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Resource not found")]
    ResourceNotFound,

    #[error("Password hashing failed: {0}")]
    Hashing(#[from] AuthError),

    #[error(transparent)]
    Repository(#[from] DatabaseError),
}

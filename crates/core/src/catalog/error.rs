use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors raised when validating incoming catalog payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("Rating must be a finite number")]
    InvalidRating,
}

/// Errors returned by catalog operations.
///
/// The display strings are the messages surfaced to API callers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// Registration with an email that is already taken.
    #[error("User already exists")]
    UserAlreadyExists { email: String },
    #[error("User not found")]
    UserNotFound { email: String },
    #[error("Movie not found on the platform")]
    MovieNotFound { title: String },
    /// A non-admin user attempted a privileged action.
    #[error("Only admin can add movies")]
    NotAdmin { email: String },
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

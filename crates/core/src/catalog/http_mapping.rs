//! Pure functions for mapping catalog errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`CatalogError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use crate::storage::RepositoryError;

use super::CatalogError;

/// Maps a [`CatalogError`] to an HTTP status code.
///
/// - `UserAlreadyExists` -> 400 (Bad Request)
/// - `UserNotFound` / `MovieNotFound` -> 404 (Not Found)
/// - `NotAdmin` -> 403 (Forbidden)
/// - `Invalid` -> 422 (Unprocessable Entity)
/// - `Storage(ConnectionFailed)` -> 503 (Service Unavailable)
/// - any other `Storage` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use movierate_core::catalog::{catalog_error_to_status_code, CatalogError};
///
/// let error = CatalogError::UserNotFound {
///     email: "a@x.com".to_string(),
/// };
/// assert_eq!(catalog_error_to_status_code(&error), 404);
/// ```
pub fn catalog_error_to_status_code(error: &CatalogError) -> u16 {
    match error {
        CatalogError::UserAlreadyExists { .. } => 400,
        CatalogError::UserNotFound { .. } => 404,
        CatalogError::MovieNotFound { .. } => 404,
        CatalogError::NotAdmin { .. } => 403,
        CatalogError::Invalid(_) => 422,
        CatalogError::Storage(RepositoryError::ConnectionFailed(_)) => 503,
        CatalogError::Storage(_) => 500,
    }
}

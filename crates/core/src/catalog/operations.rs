use super::error::{CatalogError, ValidationError};
use super::requests::{CreateUserRequest, MovieRequest};
use super::types::User;

/// Validates the shape of an email address.
///
/// Accepts `local@domain.tld`: exactly one `@`, a non-empty local part, and a
/// domain with a dot that neither starts nor ends the domain. No whitespace.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidEmail(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(invalid());
    }

    Ok(())
}

/// Validates a registration payload.
///
/// Only the email is checked; any `full_name`, including an empty one, is
/// accepted.
pub fn validate_user_request(request: &CreateUserRequest) -> Result<(), ValidationError> {
    validate_email(&request.email)
}

/// Validates a movie payload (used for both adding and rating).
///
/// Titles and reviews are free-form strings. The rating must be finite.
pub fn validate_movie_request(request: &MovieRequest) -> Result<(), ValidationError> {
    if !request.rating.is_finite() {
        return Err(ValidationError::InvalidRating);
    }
    Ok(())
}

/// Only admins may add movies to the platform.
pub fn ensure_admin(user: &User) -> Result<(), CatalogError> {
    if user.is_admin {
        Ok(())
    } else {
        Err(CatalogError::NotAdmin {
            email: user.email.clone(),
        })
    }
}

//! API request and response types for catalog operations.
//!
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{Movie, User};

/// Request payload for registering a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl CreateUserRequest {
    /// Create a new non-admin registration request.
    pub fn new(email: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            full_name: full_name.into(),
            is_admin: false,
        }
    }

    /// Convert into a User with a fresh ID.
    pub fn into_user(self) -> User {
        User::new(self.email, self.full_name, self.is_admin)
    }
}

/// Request payload for adding or rating a movie.
///
/// The same shape is accepted by both endpoints. When rating, only `title`
/// is used to locate the movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRequest {
    pub title: String,
    pub rating: f64,
    pub review: String,
}

impl MovieRequest {
    pub fn new(title: impl Into<String>, rating: f64, review: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rating,
            review: review.into(),
        }
    }

    /// Convert into a Movie owned by the given user.
    pub fn into_movie(self, owner_id: Uuid) -> Movie {
        Movie::new(self.title, self.rating, self.review, Some(owner_id))
    }
}

/// Query string for `POST /movies/?email=`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieOwnerQuery {
    pub email: String,
}

/// Confirmation body returned by write endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

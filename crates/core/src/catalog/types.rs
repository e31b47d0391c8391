use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user of the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Unique across all users.
    pub email: String,
    pub full_name: String,
    /// Admins are the only users allowed to add movies.
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a generated ID.
    pub fn new(email: impl Into<String>, full_name: impl Into<String>, is_admin: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            full_name: full_name.into(),
            is_admin,
            created_at: Utc::now(),
        }
    }
}

/// A movie on the platform.
///
/// `owner_id` points at the user who most recently rated the movie (or the
/// admin who added it). Rating a movie overwrites the owner, so a movie has
/// at most one associated user at any time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub rating: f64,
    pub review: String,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Movie {
    /// Creates a new movie with a generated ID.
    pub fn new(
        title: impl Into<String>,
        rating: f64,
        review: impl Into<String>,
        owner_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            rating,
            review: review.into(),
            owner_id,
            created_at: Utc::now(),
        }
    }

    /// Returns true if the movie is currently owned by the given user.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == Some(user_id)
    }
}

/// A user together with the movies they currently own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWithMovies {
    #[serde(flatten)]
    pub user: User,
    pub movies: Vec<Movie>,
}

impl UserWithMovies {
    pub fn new(user: User, movies: Vec<Movie>) -> Self {
        Self { user, movies }
    }
}

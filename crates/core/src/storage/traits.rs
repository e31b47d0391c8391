use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::{Movie, User};

use super::Result;

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by their email address.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Creates a new user.
    ///
    /// Fails with `AlreadyExists` if the email is already taken.
    async fn create_user(&self, user: &User) -> Result<()>;
}

/// Repository for movie operations.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Gets the first movie (in insertion order) with the given title.
    async fn get_movie_by_title(&self, title: &str) -> Result<Option<Movie>>;

    /// Creates a new movie.
    async fn create_movie(&self, movie: &Movie) -> Result<()>;

    /// Lists all movies in insertion order.
    async fn list_movies(&self) -> Result<Vec<Movie>>;

    /// Lists the movies currently owned by a user.
    async fn list_movies_by_owner(&self, owner_id: Uuid) -> Result<Vec<Movie>>;

    /// Overwrites a movie's owner.
    ///
    /// Fails with `NotFound` if the movie does not exist.
    async fn assign_owner(&self, movie_id: Uuid, owner_id: Uuid) -> Result<()>;
}

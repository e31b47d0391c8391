//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use movierate_core::catalog::{Movie, User};
use movierate_core::storage::{MovieRepository, RepositoryError, Result, UserRepository};

/// In-memory storage backend.
///
/// Users are keyed by email so the uniqueness check is a map lookup. Movies
/// live in a `Vec` to keep insertion order, which mirrors `ORDER BY rowid`
/// in the SQLite backend.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            movies: Arc::new(RwLock::new(Vec::new())),
        }
    }

    async fn user_exists(&self, id: Uuid) -> bool {
        let users = self.users.read().await;
        users.values().any(|user| user.id == id)
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) || users.values().any(|u| u.id == user.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "User",
                id: user.email.clone(),
            });
        }
        users.insert(user.email.clone(), user.clone());
        Ok(())
    }
}

#[async_trait]
impl MovieRepository for InMemoryRepository {
    async fn get_movie_by_title(&self, title: &str) -> Result<Option<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|movie| movie.title == title).cloned())
    }

    async fn create_movie(&self, movie: &Movie) -> Result<()> {
        if let Some(owner_id) = movie.owner_id {
            if !self.user_exists(owner_id).await {
                return Err(RepositoryError::InvalidData(format!(
                    "Foreign key constraint violation for Movie {}",
                    movie.id
                )));
            }
        }

        let mut movies = self.movies.write().await;
        if movies.iter().any(|m| m.id == movie.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Movie",
                id: movie.id.to_string(),
            });
        }
        movies.push(movie.clone());
        Ok(())
    }

    async fn list_movies(&self) -> Result<Vec<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies.clone())
    }

    async fn list_movies_by_owner(&self, owner_id: Uuid) -> Result<Vec<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies
            .iter()
            .filter(|movie| movie.is_owned_by(owner_id))
            .cloned()
            .collect())
    }

    async fn assign_owner(&self, movie_id: Uuid, owner_id: Uuid) -> Result<()> {
        if !self.user_exists(owner_id).await {
            return Err(RepositoryError::InvalidData(format!(
                "Foreign key constraint violation for Movie {movie_id}"
            )));
        }

        let mut movies = self.movies.write().await;
        let movie = movies
            .iter_mut()
            .find(|movie| movie.id == movie_id)
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "Movie",
                id: movie_id.to_string(),
            })?;
        movie.owner_id = Some(owner_id);
        Ok(())
    }
}

//! SQLite repository implementation.
//!
//! Implements the repository traits from `movierate_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use movierate_core::catalog::{Movie, User};
use movierate_core::storage::{MovieRepository, RepositoryError, Result, UserRepository};

use super::conversions::{format_datetime, row_to_movie, row_to_user};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// All statements run on the single background thread owned by the
/// `tokio_rusqlite::Connection`, one statement per call (auto-commit).
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::debug!(path, "Opened SQLite database");

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let email_str = email.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_USER_BY_EMAIL)
                    .map_err(wrap_err)?;
                match stmt.query_row([&email_str], row_to_user) {
                    Ok(user) => Ok(Some(user)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User", email))
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let id = user.id.to_string();
        let email = user.email.clone();
        let full_name = user.full_name.clone();
        let is_admin = user.is_admin;
        let created_at = format_datetime(&user.created_at);

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_USER,
                    rusqlite::params![id, email, full_name, is_admin, created_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User", user.email.as_str()))
    }
}

// ============================================================================
// MovieRepository implementation
// ============================================================================

#[async_trait]
impl MovieRepository for SqliteRepository {
    async fn get_movie_by_title(&self, title: &str) -> Result<Option<Movie>> {
        let title_str = title.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_MOVIE_BY_TITLE)
                    .map_err(wrap_err)?;
                match stmt.query_row([&title_str], row_to_movie) {
                    Ok(movie) => Ok(Some(movie)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Movie", title))
    }

    async fn create_movie(&self, movie: &Movie) -> Result<()> {
        let id = movie.id.to_string();
        let title = movie.title.clone();
        let rating = movie.rating;
        let review = movie.review.clone();
        let owner_id = movie.owner_id.map(|id| id.to_string());
        let created_at = format_datetime(&movie.created_at);

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_MOVIE,
                    rusqlite::params![id, title, rating, review, owner_id, created_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Movie", movie.id.to_string()))
    }

    async fn list_movies(&self) -> Result<Vec<Movie>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_MOVIES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_movie).map_err(wrap_err)?;

                let mut movies = Vec::new();
                for row_result in rows {
                    movies.push(row_result.map_err(wrap_err)?);
                }
                Ok(movies)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn list_movies_by_owner(&self, owner_id: Uuid) -> Result<Vec<Movie>> {
        let owner_id_str = owner_id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_MOVIES_BY_OWNER)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([&owner_id_str], row_to_movie)
                    .map_err(wrap_err)?;

                let mut movies = Vec::new();
                for row_result in rows {
                    movies.push(row_result.map_err(wrap_err)?);
                }
                Ok(movies)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn assign_owner(&self, movie_id: Uuid, owner_id: Uuid) -> Result<()> {
        let id = movie_id.to_string();
        let owner = owner_id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_MOVIE_OWNER, rusqlite::params![id, owner])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Movie", movie_id.to_string()))
    }
}

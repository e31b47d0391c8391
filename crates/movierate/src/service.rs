//! Catalog use-case service.
//!
//! Every operation performs its reads and writes through the injected
//! repositories and returns either a result or a [`CatalogError`]. Writes are
//! a single repository call each, so an operation either commits fully or
//! leaves the store untouched.

use std::sync::Arc;

use movierate_core::catalog::{
    ensure_admin, validate_email, validate_movie_request, validate_user_request, CatalogError,
    CreateUserRequest, MessageResponse, Movie, MovieRequest, User, UserWithMovies,
};
use movierate_core::storage::{MovieRepository, RepositoryError, UserRepository};

type Result<T> = std::result::Result<T, CatalogError>;

/// Request handler for users and movies.
#[derive(Clone)]
pub struct CatalogService {
    users: Arc<dyn UserRepository>,
    movies: Arc<dyn MovieRepository>,
}

impl CatalogService {
    /// Creates a service over the given repositories.
    pub fn new(users: Arc<dyn UserRepository>, movies: Arc<dyn MovieRepository>) -> Self {
        Self { users, movies }
    }

    /// Registers a new user.
    ///
    /// Fails with `UserAlreadyExists` when the email is taken, including when
    /// a concurrent registration wins the race after the pre-check.
    pub async fn register_user(&self, request: CreateUserRequest) -> Result<MessageResponse> {
        validate_user_request(&request)?;

        if self.users.get_user_by_email(&request.email).await?.is_some() {
            return Err(CatalogError::UserAlreadyExists {
                email: request.email,
            });
        }

        let user = request.into_user();
        match self.users.create_user(&user).await {
            Ok(()) => {}
            Err(RepositoryError::AlreadyExists { .. }) => {
                return Err(CatalogError::UserAlreadyExists { email: user.email });
            }
            Err(err) => return Err(err.into()),
        }

        tracing::info!(user_id = %user.id, email = %user.email, is_admin = user.is_admin, "Registered user");

        Ok(MessageResponse::new("User created successfully"))
    }

    /// Gets a user together with the movies they currently own.
    pub async fn get_user(&self, email: &str) -> Result<UserWithMovies> {
        let user = self.require_user(email).await?;
        let movies = self.movies.list_movies_by_owner(user.id).await?;

        Ok(UserWithMovies::new(user, movies))
    }

    /// Adds a movie to the platform, owned by the admin who added it.
    pub async fn add_movie(&self, email: &str, request: MovieRequest) -> Result<MessageResponse> {
        validate_movie_request(&request)?;

        let user = self.require_user(email).await?;
        ensure_admin(&user)?;

        let movie = request.into_movie(user.id);
        self.movies.create_movie(&movie).await?;

        tracing::info!(movie_id = %movie.id, title = %movie.title, owner_id = %user.id, "Added movie");

        Ok(MessageResponse::new("Movie added successfully"))
    }

    /// Lists every movie on the platform.
    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        Ok(self.movies.list_movies().await?)
    }

    /// Rates a movie by reassigning its owner to the rating user.
    ///
    /// The movie is looked up before the user. The request's `rating` and
    /// `review` are validated but not stored; the movie keeps the values it
    /// was added with.
    pub async fn rate_movie(&self, email: &str, request: MovieRequest) -> Result<MessageResponse> {
        validate_movie_request(&request)?;

        let movie = self
            .movies
            .get_movie_by_title(&request.title)
            .await?
            .ok_or_else(|| CatalogError::MovieNotFound {
                title: request.title.clone(),
            })?;

        let user = self.require_user(email).await?;

        self.movies.assign_owner(movie.id, user.id).await?;

        tracing::info!(
            movie_id = %movie.id,
            title = %movie.title,
            previous_owner = ?movie.owner_id,
            owner_id = %user.id,
            "Rated movie"
        );

        Ok(MessageResponse::new("Movie rated successfully"))
    }

    /// Lists the movies currently owned by a user.
    pub async fn get_user_movies(&self, email: &str) -> Result<Vec<Movie>> {
        let user = self.require_user(email).await?;
        Ok(self.movies.list_movies_by_owner(user.id).await?)
    }

    async fn require_user(&self, email: &str) -> Result<User> {
        validate_email(email)?;

        self.users
            .get_user_by_email(email)
            .await?
            .ok_or_else(|| CatalogError::UserNotFound {
                email: email.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;
    use movierate_core::catalog::ValidationError;

    fn service() -> CatalogService {
        let repo = Arc::new(InMemoryRepository::new());
        CatalogService::new(repo.clone(), repo)
    }

    async fn seed_admin(service: &CatalogService, email: &str) {
        service
            .register_user(CreateUserRequest {
                is_admin: true,
                ..CreateUserRequest::new(email, "Admin")
            })
            .await
            .unwrap();
    }

    async fn seed_user(service: &CatalogService, email: &str) {
        service
            .register_user(CreateUserRequest::new(email, "Viewer"))
            .await
            .unwrap();
    }

    fn dune() -> MovieRequest {
        MovieRequest::new("Dune", 4.5, "good")
    }

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    /// Sees no user on lookup, then hits the unique constraint on insert, as
    /// when another registration commits in between.
    struct RacingUserRepository;

    #[async_trait::async_trait]
    impl UserRepository for RacingUserRepository {
        async fn get_user_by_email(
            &self,
            _email: &str,
        ) -> movierate_core::storage::Result<Option<User>> {
            Ok(None)
        }

        async fn create_user(&self, user: &User) -> movierate_core::storage::Result<()> {
            Err(RepositoryError::AlreadyExists {
                entity_type: "User",
                id: user.email.clone(),
            })
        }
    }

    // ==================== register_user ====================

    #[tokio::test]
    async fn test_register_user() {
        let service = service();

        let response = service
            .register_user(CreateUserRequest::new("a@x.com", "Alice"))
            .await
            .unwrap();

        assert_eq!(response.message, "User created successfully");
        let user = service.get_user("a@x.com").await.unwrap();
        assert_eq!(user.user.full_name, "Alice");
        assert!(!user.user.is_admin);
    }

    #[tokio::test]
    async fn test_register_same_email_twice_conflicts() {
        let service = service();
        seed_user(&service, "a@x.com").await;

        let result = service
            .register_user(CreateUserRequest {
                is_admin: true,
                ..CreateUserRequest::new("a@x.com", "Again")
            })
            .await;

        assert_eq!(
            result,
            Err(CatalogError::UserAlreadyExists {
                email: "a@x.com".to_string()
            })
        );
        let user = service.get_user("a@x.com").await.unwrap();
        assert!(!user.user.is_admin);
    }

    #[tokio::test]
    async fn test_register_invalid_email() {
        let service = service();

        let result = service
            .register_user(CreateUserRequest::new("not-an-email", "Alice"))
            .await;

        assert!(matches!(
            result,
            Err(CatalogError::Invalid(ValidationError::InvalidEmail(_)))
        ));
    }

    #[tokio::test]
    async fn test_register_with_empty_full_name() {
        let service = service();

        service
            .register_user(CreateUserRequest::new("a@x.com", ""))
            .await
            .unwrap();

        let user = service.get_user("a@x.com").await.unwrap();
        assert_eq!(user.user.full_name, "");
    }

    #[tokio::test]
    async fn test_register_loses_race_on_insert() {
        let repo = Arc::new(InMemoryRepository::new());
        let service = CatalogService::new(Arc::new(RacingUserRepository), repo);

        let result = service
            .register_user(CreateUserRequest::new("a@x.com", "Alice"))
            .await;

        assert_eq!(
            result,
            Err(CatalogError::UserAlreadyExists {
                email: "a@x.com".to_string()
            })
        );
    }

    // ==================== get_user ====================

    #[tokio::test]
    async fn test_get_unregistered_user_is_not_found() {
        let service = service();

        let result = service.get_user("ghost@x.com").await;

        assert_eq!(
            result,
            Err(CatalogError::UserNotFound {
                email: "ghost@x.com".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_get_user_includes_owned_movies() {
        let service = service();
        seed_admin(&service, "a@x.com").await;
        service.add_movie("a@x.com", dune()).await.unwrap();

        let user = service.get_user("a@x.com").await.unwrap();

        assert_eq!(titles(&user.movies), vec!["Dune"]);
    }

    // ==================== add_movie ====================

    #[tokio::test]
    async fn test_add_movie_as_admin_appears_in_list() {
        let service = service();
        seed_admin(&service, "a@x.com").await;

        let response = service.add_movie("a@x.com", dune()).await.unwrap();

        assert_eq!(response.message, "Movie added successfully");
        let movies = service.list_movies().await.unwrap();
        assert_eq!(titles(&movies), vec!["Dune"]);
        assert_eq!(movies[0].rating, 4.5);
        assert_eq!(movies[0].review, "good");
    }

    #[tokio::test]
    async fn test_add_movie_unknown_email_is_not_found() {
        let service = service();

        let result = service.add_movie("ghost@x.com", dune()).await;

        assert!(matches!(result, Err(CatalogError::UserNotFound { .. })));
        assert!(service.list_movies().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_movie_non_admin_is_forbidden() {
        let service = service();
        seed_user(&service, "b@x.com").await;

        let result = service.add_movie("b@x.com", dune()).await;

        assert_eq!(
            result,
            Err(CatalogError::NotAdmin {
                email: "b@x.com".to_string()
            })
        );
        assert!(service.list_movies().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_movie_accepts_empty_and_long_titles() {
        let service = service();
        seed_admin(&service, "a@x.com").await;
        let long_title = "t".repeat(201);

        service
            .add_movie("a@x.com", MovieRequest::new("", 3.0, ""))
            .await
            .unwrap();
        service
            .add_movie("a@x.com", MovieRequest::new(long_title.clone(), 3.0, ""))
            .await
            .unwrap();

        let movies = service.list_movies().await.unwrap();
        assert_eq!(titles(&movies), vec!["", long_title.as_str()]);
    }

    #[tokio::test]
    async fn test_add_movie_non_finite_rating_is_invalid() {
        let service = service();
        seed_admin(&service, "a@x.com").await;

        let result = service
            .add_movie("a@x.com", MovieRequest::new("Dune", f64::NAN, ""))
            .await;

        assert_eq!(
            result,
            Err(CatalogError::Invalid(ValidationError::InvalidRating))
        );
        assert!(service.list_movies().await.unwrap().is_empty());
    }

    // ==================== list_movies ====================

    #[tokio::test]
    async fn test_list_movies_empty() {
        let service = service();
        assert!(service.list_movies().await.unwrap().is_empty());
    }

    // ==================== rate_movie ====================

    #[tokio::test]
    async fn test_rate_movie_reassigns_owner() {
        let service = service();
        seed_admin(&service, "a@x.com").await;
        service.add_movie("a@x.com", dune()).await.unwrap();
        seed_user(&service, "b@x.com").await;

        let response = service
            .rate_movie("b@x.com", MovieRequest::new("Dune", 1.0, "meh"))
            .await
            .unwrap();

        assert_eq!(response.message, "Movie rated successfully");
        let bobs = service.get_user_movies("b@x.com").await.unwrap();
        assert_eq!(titles(&bobs), vec!["Dune"]);
        assert!(service.get_user_movies("a@x.com").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rate_movie_does_not_store_rating_or_review() {
        let service = service();
        seed_admin(&service, "a@x.com").await;
        service.add_movie("a@x.com", dune()).await.unwrap();
        seed_user(&service, "b@x.com").await;

        service
            .rate_movie("b@x.com", MovieRequest::new("Dune", 1.0, "meh"))
            .await
            .unwrap();

        let movies = service.list_movies().await.unwrap();
        assert_eq!(movies[0].rating, 4.5);
        assert_eq!(movies[0].review, "good");
    }

    #[tokio::test]
    async fn test_rate_unknown_title_is_not_found_and_changes_nothing() {
        let service = service();
        seed_admin(&service, "a@x.com").await;
        service.add_movie("a@x.com", dune()).await.unwrap();
        seed_user(&service, "b@x.com").await;

        let result = service
            .rate_movie("b@x.com", MovieRequest::new("Alien", 5.0, "great"))
            .await;

        assert_eq!(
            result,
            Err(CatalogError::MovieNotFound {
                title: "Alien".to_string()
            })
        );
        assert_eq!(
            titles(&service.get_user_movies("a@x.com").await.unwrap()),
            vec!["Dune"]
        );
        assert!(service.get_user_movies("b@x.com").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rate_by_unknown_user_is_not_found_and_changes_nothing() {
        let service = service();
        seed_admin(&service, "a@x.com").await;
        service.add_movie("a@x.com", dune()).await.unwrap();

        let result = service.rate_movie("ghost@x.com", dune()).await;

        assert!(matches!(result, Err(CatalogError::UserNotFound { .. })));
        assert_eq!(
            titles(&service.get_user_movies("a@x.com").await.unwrap()),
            vec!["Dune"]
        );
    }

    #[tokio::test]
    async fn test_rate_empty_title_is_looked_up_like_any_other() {
        let service = service();
        seed_user(&service, "b@x.com").await;

        let result = service
            .rate_movie("b@x.com", MovieRequest::new("", 1.0, ""))
            .await;

        assert_eq!(
            result,
            Err(CatalogError::MovieNotFound {
                title: String::new()
            })
        );

        seed_admin(&service, "a@x.com").await;
        service
            .add_movie("a@x.com", MovieRequest::new("", 3.0, ""))
            .await
            .unwrap();
        service
            .rate_movie("b@x.com", MovieRequest::new("", 1.0, ""))
            .await
            .unwrap();

        assert_eq!(
            titles(&service.get_user_movies("b@x.com").await.unwrap()),
            vec![""]
        );
    }

    #[tokio::test]
    async fn test_rate_checks_movie_before_user() {
        let service = service();

        let result = service.rate_movie("ghost@x.com", dune()).await;

        assert!(matches!(result, Err(CatalogError::MovieNotFound { .. })));
    }

    #[tokio::test]
    async fn test_last_rating_wins() {
        let service = service();
        seed_admin(&service, "a@x.com").await;
        service.add_movie("a@x.com", dune()).await.unwrap();
        seed_user(&service, "b@x.com").await;
        seed_user(&service, "c@x.com").await;

        service.rate_movie("b@x.com", dune()).await.unwrap();
        service.rate_movie("c@x.com", dune()).await.unwrap();

        assert!(service.get_user_movies("b@x.com").await.unwrap().is_empty());
        assert_eq!(
            titles(&service.get_user_movies("c@x.com").await.unwrap()),
            vec!["Dune"]
        );
    }

    // ==================== get_user_movies ====================

    #[tokio::test]
    async fn test_get_user_movies_unknown_user() {
        let service = service();

        let result = service.get_user_movies("ghost@x.com").await;

        assert!(matches!(result, Err(CatalogError::UserNotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_user_movies_only_returns_owned() {
        let service = service();
        seed_admin(&service, "a@x.com").await;
        service.add_movie("a@x.com", dune()).await.unwrap();
        service
            .add_movie("a@x.com", MovieRequest::new("Alien", 5.0, "great"))
            .await
            .unwrap();
        seed_user(&service, "b@x.com").await;
        service
            .rate_movie("b@x.com", MovieRequest::new("Alien", 5.0, ""))
            .await
            .unwrap();

        assert_eq!(
            titles(&service.get_user_movies("a@x.com").await.unwrap()),
            vec!["Dune"]
        );
        assert_eq!(
            titles(&service.get_user_movies("b@x.com").await.unwrap()),
            vec!["Alien"]
        );
    }
}

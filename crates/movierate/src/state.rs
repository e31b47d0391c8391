//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The store handle is constructed explicitly at startup
//! and injected here; handlers never reach for a global connection.

use std::sync::Arc;

use movierate_core::storage::{MovieRepository, UserRepository};

use crate::config::Config;
use crate::service::CatalogService;

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Request handler for users and movies.
    pub catalog: CatalogService,
    /// Runtime configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates an AppState over the given repositories.
    pub fn build(
        user_repo: Arc<dyn UserRepository>,
        movie_repo: Arc<dyn MovieRepository>,
        config: Config,
    ) -> Self {
        Self {
            catalog: CatalogService::new(user_repo, movie_repo),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Factory functions for different storage backends
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
            let repo = if config.database_path == ":memory:" {
                SqliteRepository::new_in_memory().await?
            } else {
                SqliteRepository::new(&config.database_path).await?
            };
            let repo = Arc::new(repo);

            tracing::info!(path = %config.database_path, "Using SQLite storage");

            Ok(Self::build(repo.clone(), repo, config))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for testing without any external dependencies.
        pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());

            tracing::info!("Using in-memory storage");

            Ok(Self::build(repo.clone(), repo, config))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

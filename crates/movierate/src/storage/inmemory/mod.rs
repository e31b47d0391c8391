//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the repository traits
//! that keeps all data in `Arc<RwLock<_>>`-wrapped collections. This is useful
//! for testing and development scenarios where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use movierate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;

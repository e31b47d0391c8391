//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
///
/// Foreign keys are off by default in SQLite and must be enabled per connection.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Users table
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    full_name TEXT NOT NULL,
    is_admin INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

-- Movies table
CREATE TABLE IF NOT EXISTS movies (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    rating REAL NOT NULL,
    review TEXT NOT NULL,
    owner_id TEXT,
    created_at TEXT NOT NULL,
    FOREIGN KEY (owner_id) REFERENCES users(id)
);

-- Indexes for efficient queries
CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email);
CREATE INDEX IF NOT EXISTS idx_movies_owner_id ON movies(owner_id);
CREATE INDEX IF NOT EXISTS idx_movies_title ON movies(title);
"#;

// User queries
pub const INSERT_USER: &str = r#"
INSERT INTO users (id, email, full_name, is_admin, created_at)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_USER_BY_EMAIL: &str = r#"
SELECT id, email, full_name, is_admin, created_at
FROM users
WHERE email = ?1
"#;

// Movie queries
pub const INSERT_MOVIE: &str = r#"
INSERT INTO movies (id, title, rating, review, owner_id, created_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_MOVIE_BY_TITLE: &str = r#"
SELECT id, title, rating, review, owner_id, created_at
FROM movies
WHERE title = ?1
ORDER BY rowid ASC
LIMIT 1
"#;

pub const SELECT_ALL_MOVIES: &str = r#"
SELECT id, title, rating, review, owner_id, created_at
FROM movies
ORDER BY rowid ASC
"#;

pub const SELECT_MOVIES_BY_OWNER: &str = r#"
SELECT id, title, rating, review, owner_id, created_at
FROM movies
WHERE owner_id = ?1
ORDER BY rowid ASC
"#;

pub const UPDATE_MOVIE_OWNER: &str = r#"
UPDATE movies
SET owner_id = ?2
WHERE id = ?1
"#;

//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use chrono::{DateTime, Utc};
use rusqlite::Row;
use uuid::Uuid;

use movierate_core::catalog::{Movie, User};

/// Convert a SQLite row to a User.
///
/// Expected columns: id, email, full_name, is_admin, created_at
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    let id: String = row.get(0)?;
    let email: String = row.get(1)?;
    let full_name: String = row.get(2)?;
    let is_admin: bool = row.get(3)?;
    let created_at: String = row.get(4)?;

    Ok(User {
        id: parse_uuid(0, &id)?,
        email,
        full_name,
        is_admin,
        created_at: parse_datetime(4, &created_at)?,
    })
}

/// Convert a SQLite row to a Movie.
///
/// Expected columns: id, title, rating, review, owner_id, created_at
pub fn row_to_movie(row: &Row) -> rusqlite::Result<Movie> {
    let id: String = row.get(0)?;
    let title: String = row.get(1)?;
    let rating: f64 = row.get(2)?;
    let review: String = row.get(3)?;
    let owner_id: Option<String> = row.get(4)?;
    let created_at: String = row.get(5)?;

    Ok(Movie {
        id: parse_uuid(0, &id)?,
        title,
        rating,
        review,
        owner_id: owner_id.as_deref().map(|s| parse_uuid(4, s)).transpose()?,
        created_at: parse_datetime(5, &created_at)?,
    })
}

/// Parse a UUID from string, reporting the column it came from.
fn parse_uuid(column: usize, s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}

/// Format a DateTime for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

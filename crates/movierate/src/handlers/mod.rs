pub mod error;
pub mod health;
pub mod movies;
pub mod users;

pub use error::ApiError;

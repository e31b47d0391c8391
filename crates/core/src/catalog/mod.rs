mod error;
mod http_mapping;
mod operations;
mod requests;
mod types;

pub use error::{CatalogError, ValidationError};
pub use http_mapping::catalog_error_to_status_code;
pub use operations::{ensure_admin, validate_email, validate_movie_request, validate_user_request};
pub use requests::{CreateUserRequest, MessageResponse, MovieOwnerQuery, MovieRequest};
pub use types::{Movie, User, UserWithMovies};

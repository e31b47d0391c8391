//! User handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use movierate_core::catalog::{
    CreateUserRequest, MessageResponse, Movie, MovieRequest, UserWithMovies,
};

use crate::{handlers::ApiError, state::AppState};

/// Register a user (POST /users/).
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(payload) = payload?;

    tracing::debug!(email = %payload.email, "Received register user request");

    let response = state.catalog.register_user(payload).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Get a user and the movies they own (GET /users/{email}).
pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserWithMovies>, ApiError> {
    let user = state.catalog.get_user(&email).await?;
    Ok(Json(user))
}

/// Rate a movie, moving it into the user's collection (POST /users/{email}/movies/).
pub async fn rate_movie(
    State(state): State<AppState>,
    Path(email): Path<String>,
    payload: Result<Json<MovieRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(payload) = payload?;

    tracing::debug!(%email, title = %payload.title, "Received rate movie request");

    let response = state.catalog.rate_movie(&email, payload).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// List the movies a user currently owns (GET /users/{email}/movies/).
pub async fn list_user_movies(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = state.catalog.get_user_movies(&email).await?;
    Ok(Json(movies))
}

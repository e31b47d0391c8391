//! Movie handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};

use movierate_core::catalog::{MessageResponse, Movie, MovieOwnerQuery, MovieRequest};

use crate::{handlers::ApiError, state::AppState};

/// Add a movie to the platform, admins only (POST /movies/?email=).
pub async fn create_movie(
    State(state): State<AppState>,
    query: Result<Query<MovieOwnerQuery>, QueryRejection>,
    payload: Result<Json<MovieRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Query(MovieOwnerQuery { email }) = query?;
    let Json(payload) = payload?;

    tracing::debug!(%email, title = %payload.title, "Received add movie request");

    let response = state.catalog.add_movie(&email, payload).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// List all movies (GET /movies/).
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = state.catalog.list_movies().await?;
    Ok(Json(movies))
}

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        movies::{create_movie, list_movies},
        users::{create_user, get_user, list_user_movies, rate_movie},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Collection routes are registered with and without the trailing slash.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let timeout = state.config.request_timeout();

    Router::new()
        // User routes
        .route("/users", post(create_user))
        .route("/users/", post(create_user))
        .route("/users/{email}", get(get_user))
        .route(
            "/users/{email}/movies",
            get(list_user_movies).post(rate_movie),
        )
        .route(
            "/users/{email}/movies/",
            get(list_user_movies).post(rate_movie),
        )
        // Movie routes
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/", get(list_movies).post(create_movie))
        // Probes
        .route("/livez", get(livez))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .with_state(state)
}

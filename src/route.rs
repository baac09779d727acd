//! Route definitions for the movies API
//!
//! This module configures all HTTP routes and maps them to their respective handlers.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler::{create_movie, get_movie, list_movies};
use crate::store::AppState;

/// Creates and configures the Axum application router with all routes
///
/// # Route Definitions
///
/// - `GET /movies` - Lists movies, optionally filtered with `?genre=`
/// - `POST /movies` - Creates a movie
/// - `GET /movies/{id}` - Fetches a single movie
///
/// Every request is traced through `tower_http`'s `TraceLayer`.
///
/// # Example Usage
///
/// ```no_run
/// # use movies_api::store::{AppState, MovieStore};
/// # use movies_api::route::create_app;
/// let state = AppState::new(MovieStore::load(None).unwrap());
/// let app = create_app(state);
/// // axum::serve(listener, app).await.unwrap();
/// ```
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/{id}", get(get_movie))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

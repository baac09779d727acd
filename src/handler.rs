//! HTTP request handlers for the movies API
//!
//! Each handler maps one collection operation onto HTTP:
//! - Listing movies, optionally filtered by genre
//! - Fetching a single movie by id
//! - Creating a movie from a validated payload

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;
use crate::model::{ListParams, Movie, MovieDraft};
use crate::store::AppState;

/// Lists movies, optionally filtered by genre
///
/// # Query Parameters
///
/// - `genre` (optional) - Only return movies with this genre (case-insensitive).
///   An empty value lists everything; if the key repeats, the first one wins.
///
/// # Example Request
///
/// `GET /movies?genre=drama`
///
/// # Response
///
/// - **200 OK** - JSON array of movies, possibly empty. Listing never fails;
///   a query string that cannot be decoded is treated as having no filter.
pub async fn list_movies(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<Vec<Movie>> {
    let params = match query {
        Ok(Query(pairs)) => ListParams::from_pairs(&pairs),
        Err(rejection) => {
            debug!(error = %rejection, "Ignoring undecodable query string");
            ListParams::default()
        }
    };

    Json(state.movies.list(params.genre.as_deref()).await)
}

/// Returns the movie with the given id
///
/// # Response
///
/// - **200 OK** - The movie
/// - **404 Not Found** - `{ "error": "Movie not found" }`
pub async fn get_movie(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Movie>, ApiError> {
    state
        .movies
        .get(&id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Creates a new movie
///
/// The payload is validated before anything is stored. A body that is
/// not a JSON object is reported the same way as an invalid field.
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Inception",
///   "year": 2010,
///   "director": "Christopher Nolan",
///   "duration": 8,
///   "poster": "https://example.com/inception.jpg",
///   "genre": ["Action", "Sci-Fi"],
///   "rate": 8.8  // Optional, defaults to 0
/// }
/// ```
///
/// # Response
///
/// - **201 Created** - The stored movie, including its generated id
/// - **400 Bad Request** - Field-level validation issues
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let Json(body) = payload?;
    let new_movie = MovieDraft::from_json(body)?.validate()?;

    let movie = state.movies.create(new_movie).await;

    Ok((StatusCode::CREATED, Json(movie)))
}

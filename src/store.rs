//! In-memory movie collection and seed loading
//!
//! The collection lives in a [`MovieStore`] owned by the application state.
//! It is loaded once at startup and only ever grows by appending newly
//! created movies.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use rand::{distr::Alphanumeric, Rng};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::model::{Movie, NewMovie};

/// Seed bundled into the binary, used when no seed file is configured
pub const BUNDLED_SEED: &str = include_str!("../data/movies.json");

/// Length of generated movie ids
const ID_LEN: usize = 16;

/// Errors raised while building the collection from seed data
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate movie id in seed data: {0}")]
    DuplicateId(String),
}

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<MovieStore>,
}

impl AppState {
    pub fn new(store: MovieStore) -> Self {
        Self {
            movies: Arc::new(store),
        }
    }
}

/// The movie collection
///
/// Reads share the lock; creation takes it exclusively so the id check and
/// the append happen in one step.
#[derive(Debug, Default)]
pub struct MovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MovieStore {
    /// Builds a store from already-typed records
    ///
    /// Fails if two records share an id.
    pub fn new(movies: Vec<Movie>) -> Result<Self, StoreError> {
        {
            let mut seen = HashSet::with_capacity(movies.len());
            for movie in &movies {
                if !seen.insert(movie.id.as_str()) {
                    return Err(StoreError::DuplicateId(movie.id.clone()));
                }
            }
        }

        Ok(Self {
            movies: RwLock::new(movies),
        })
    }

    /// Parses a JSON array of movies
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let movies: Vec<Movie> = serde_json::from_str(json)?;
        Self::new(movies)
    }

    /// Loads the seed from `path`, or the bundled seed if no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, StoreError> {
        let (source, json) = match path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                (path.display().to_string(), json)
            }
            None => ("bundled".to_string(), BUNDLED_SEED.to_string()),
        };

        let mut store = Self::from_json(&json)?;
        info!(source = %source, count = store.movies.get_mut().len(), "Loaded movie seed");

        Ok(store)
    }

    /// Returns a snapshot of all movies, optionally filtered by genre
    ///
    /// The genre filter is compared case-insensitively against each of the
    /// movie's genres. An unknown genre simply matches nothing.
    pub async fn list(&self, genre: Option<&str>) -> Vec<Movie> {
        let movies = self.movies.read().await;

        match genre {
            Some(filter) => movies
                .iter()
                .filter(|movie| movie.has_genre(filter))
                .cloned()
                .collect(),
            None => movies.clone(),
        }
    }

    /// Looks up a movie by exact id
    pub async fn get(&self, id: &str) -> Option<Movie> {
        self.movies
            .read()
            .await
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
    }

    /// Assigns a fresh id to `new_movie` and appends it
    pub async fn create(&self, new_movie: NewMovie) -> Movie {
        let mut movies = self.movies.write().await;

        let id = loop {
            let candidate = generate_id();
            if !movies.iter().any(|movie| movie.id == candidate) {
                break candidate;
            }
            debug!(id = %candidate, "Generated id collided, retrying");
        };

        let movie = new_movie.into_movie(id);
        movies.push(movie.clone());

        info!(id = %movie.id, title = %movie.title, total = movies.len(), "Movie created");

        movie
    }

    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

fn generate_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LEN)
        .map(char::from)
        .collect()
}

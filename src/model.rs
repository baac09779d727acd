//! Data models for the movies API
//!
//! This module defines the movie entity, the fixed genre enumeration, the
//! raw creation payload and the query parameters accepted by the listing
//! endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A movie record as stored in the collection and returned by the API
///
/// # Example
/// ```json
/// {
///   "id": "dcdd0fad-a94c-4810-8acc-5f108d3b18c3",
///   "title": "The Shawshank Redemption",
///   "year": 1994,
///   "director": "Frank Darabont",
///   "duration": 142,
///   "poster": "https://i.ebayimg.com/images/g/4goAAOSwMyBe7hnQ/s-l1200.webp",
///   "genre": ["Drama"],
///   "rate": 9.3
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Movie {
    /// Opaque identifier, unique within the collection
    pub id: String,

    pub title: String,

    pub year: i64,

    pub director: String,

    /// Runtime as recorded for the movie
    pub duration: i64,

    /// Poster image URL
    pub poster: String,

    pub genre: Vec<Genre>,

    /// Rating between 0 and 10
    /// Defaults to 0 if not present during deserialization
    #[serde(default)]
    pub rate: f64,
}

impl Movie {
    /// Returns true if any of the movie's genres equals `filter`, ignoring case
    pub fn has_genre(&self, filter: &str) -> bool {
        let wanted = filter.to_lowercase();
        self.genre
            .iter()
            .any(|genre| genre.as_str().to_lowercase() == wanted)
    }
}

/// The fixed set of genres a movie may belong to
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Thriller,
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

impl Genre {
    pub const ALL: [Genre; 8] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Thriller,
        Genre::SciFi,
    ];

    /// The wire name of the genre, as it appears in JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Thriller => "Thriller",
            Genre::SciFi => "Sci-Fi",
        }
    }

    /// Exact (case-sensitive) lookup by wire name
    pub fn from_name(name: &str) -> Option<Genre> {
        Genre::ALL.into_iter().find(|genre| genre.as_str() == name)
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw request payload for creating a movie
///
/// Every field is kept as an untyped JSON value so that validation can
/// report exactly which field is missing, mistyped or out of range.
/// A field that is absent from the body deserializes to `None`.
///
/// # Example
/// ```json
/// {
///   "title": "Inception",
///   "year": 2010,
///   "director": "Christopher Nolan",
///   "duration": 8,
///   "poster": "https://example.com/inception.jpg",
///   "genre": ["Action", "Sci-Fi"],
///   "rate": 8.8  // Optional
/// }
/// ```
#[derive(Deserialize, Debug, Clone, Default)]
pub struct MovieDraft {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub year: Option<Value>,
    #[serde(default)]
    pub director: Option<Value>,
    #[serde(default)]
    pub duration: Option<Value>,
    #[serde(default)]
    pub rate: Option<Value>,
    #[serde(default)]
    pub poster: Option<Value>,
    #[serde(default)]
    pub genre: Option<Value>,
}

/// A fully validated movie that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i64,
    pub director: String,
    pub duration: i64,
    pub rate: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

impl NewMovie {
    /// Attaches the generated id, producing the record that gets stored
    pub fn into_movie(self, id: String) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            director: self.director,
            duration: self.duration,
            poster: self.poster,
            genre: self.genre,
            rate: self.rate,
        }
    }
}

/// Query parameters for listing movies
///
/// # Example
/// Query string: `?genre=drama`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListParams {
    /// Optional genre filter, matched case-insensitively
    pub genre: Option<String>,
}

impl ListParams {
    /// Builds the parameters from raw query pairs
    ///
    /// Only the first `genre` key is used. An empty value means no filter.
    /// Unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let genre = pairs
            .iter()
            .find(|(key, _)| key == "genre")
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Self { genre }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn list_params_use_first_genre() {
        let params = ListParams::from_pairs(&pairs(&[("genre", "drama"), ("genre", "action")]));
        assert_eq!(params.genre.as_deref(), Some("drama"));
    }

    #[test]
    fn empty_genre_means_no_filter() {
        assert_eq!(ListParams::from_pairs(&pairs(&[("genre", "")])), ListParams::default());
        assert_eq!(ListParams::from_pairs(&pairs(&[("genre", "  ")])), ListParams::default());
        assert_eq!(ListParams::from_pairs(&pairs(&[("page", "2")])), ListParams::default());
    }
}

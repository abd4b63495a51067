//! Wire types for the OMDb search endpoint.
//!
//! Field names follow the upstream payload (`Title`, `Year`, `Type`,
//! `Poster`), renamed to snake_case on the Rust side. Only the fields the
//! gallery consumes are decoded; everything else is ignored.

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::parser::coerce_year;

/// Poster value the API uses when no artwork exists.
pub const POSTER_UNAVAILABLE: &str = "N/A";

/// Category value for video-game entries.
pub const GAME_TYPE: &str = "game";

// =============================================================================
// Search Response
// =============================================================================

/// Top-level object returned by `GET /?s=...`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Option<Vec<MovieSummary>>,

    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,

    /// `"True"` or `"False"`
    #[serde(rename = "Response", default)]
    pub response: Option<String>,

    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl SearchResponse {
    /// Build a successful response around a list of movies.
    pub fn from_movies(movies: Vec<MovieSummary>) -> Self {
        Self {
            total_results: Some(movies.len().to_string()),
            search: Some(movies),
            response: Some("True".to_string()),
            error: None,
        }
    }

    /// Extract the `Search` array as the working sequence.
    ///
    /// Fails when the API flagged the request as unsuccessful or the array is
    /// absent. The order of the upstream array is preserved.
    pub fn into_movies(self) -> Result<Vec<MovieSummary>> {
        if self.response.as_deref() == Some("False") {
            return Err(CatalogError::Upstream {
                message: self
                    .error
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }
        self.search.ok_or(CatalogError::MissingSearch)
    }
}

// =============================================================================
// Movie Summary
// =============================================================================

/// One entry of the `Search` array.
///
/// Missing fields decode as empty strings; the program trusts the upstream
/// shape and does no further validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MovieSummary {
    #[serde(rename = "Title", default)]
    pub title: String,

    /// Release year as text, e.g. `"2001"` or `"2011–"` for running series
    #[serde(rename = "Year", default)]
    pub year: String,

    /// `"movie"`, `"series"`, `"episode"` or `"game"`
    #[serde(rename = "Type", default)]
    pub kind: String,

    /// Artwork URL, or [`POSTER_UNAVAILABLE`]. A missing field decodes as `""`
    #[serde(rename = "Poster", default)]
    pub poster: String,

    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
}

impl MovieSummary {
    pub fn new(
        title: impl Into<String>,
        year: impl Into<String>,
        kind: impl Into<String>,
        poster: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            kind: kind.into(),
            poster: poster.into(),
            imdb_id: None,
        }
    }

    /// The `Year` text coerced to a number, if it is one.
    pub fn year_value(&self) -> Option<f64> {
        coerce_year(&self.year)
    }

    pub fn is_game(&self) -> bool {
        self.kind == GAME_TYPE
    }

    pub fn has_poster(&self) -> bool {
        self.poster != POSTER_UNAVAILABLE
    }
}

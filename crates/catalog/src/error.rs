//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while decoding a search payload.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The body was not valid JSON, or a consumed field had the wrong shape
    #[error("Malformed search response: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered with `"Response": "False"`
    ///
    /// OMDb uses this for "Movie not found!", "Too many results." and
    /// invalid API keys, all with a 200 status.
    #[error("Upstream rejected the search: {message}")]
    Upstream { message: String },

    /// The payload decoded but carried no `Search` array
    #[error("Search response has no `Search` field")]
    MissingSearch,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;

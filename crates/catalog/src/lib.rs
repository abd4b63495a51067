//! # Catalog Crate
//!
//! Data model for the OMDb movie search endpoint.
//!
//! ## Main Components
//!
//! - **types**: Search Response and Movie Summary records
//! - **parser**: JSON decoding and `Year` coercion
//! - **error**: Error types for decoding
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::parse_search_response;
//!
//! let response = parse_search_response(body)?;
//! for movie in response.into_movies()? {
//!     println!("{} ({})", movie.title, movie.year);
//! }
//! ```

pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::{coerce_year, parse_search_response};
pub use types::{GAME_TYPE, MovieSummary, POSTER_UNAVAILABLE, SearchResponse};

//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to search results.

use anyhow::Result;
use catalog::MovieSummary;

/// Core trait for filtering movies.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across tasks
/// - Filters take ownership of the Vec<MovieSummary> and return the kept
///   entries in their original order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a list of movies.
    ///
    /// # Arguments
    /// * `movies` - The movies to filter (takes ownership)
    ///
    /// # Returns
    /// * `Ok(Vec<MovieSummary>)` - The movies that passed
    /// * `Err` - If filtering fails
    fn apply(&self, movies: Vec<MovieSummary>) -> Result<Vec<MovieSummary>>;
}

//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use anyhow::Result;
use catalog::MovieSummary;

/// Chains multiple filters together into a processing pipeline.
///
/// A movie survives the pipeline only if every filter keeps it, so chaining
/// two filters is the conjunction of their keep-conditions.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ExcludedTitleFilter::default())
///     .add_filter(ExcludedTypeFilter::default());
///
/// let kept = pipeline.apply(movies)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the configured filters, in application order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the movies.
    ///
    /// ## Algorithm
    /// 1. Start with the input movies
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    pub fn apply(&self, movies: Vec<MovieSummary>) -> Result<Vec<MovieSummary>> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{ExcludedTitleFilter, ExcludedTypeFilter};

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();

        let movies = vec![
            MovieSummary::new("A", "2001", "movie", "a.jpg"),
            MovieSummary::new("B", "2002", "game", "b.jpg"),
        ];

        let filtered = pipeline.apply(movies).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(ExcludedTypeFilter::default());

        let movies = vec![
            MovieSummary::new("A", "2001", "game", "a.jpg"),
            MovieSummary::new("B", "2002", "movie", "b.jpg"),
        ];

        let filtered = pipeline.apply(movies).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "B");
    }

    #[test]
    fn test_filter_names_in_order() {
        let pipeline = FilterPipeline::new()
            .add_filter(ExcludedTitleFilter::default())
            .add_filter(ExcludedTypeFilter::default());

        assert_eq!(
            pipeline.filter_names(),
            vec!["ExcludedTitleFilter", "ExcludedTypeFilter"]
        );
    }
}

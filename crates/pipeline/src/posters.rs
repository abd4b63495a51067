//! Sort → filter → map: from search results to poster URLs.

use anyhow::Result;
use catalog::MovieSummary;
use tracing::debug;

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{ExcludedTitleFilter, ExcludedTypeFilter};
use crate::ordering::sort_by_year;

/// Turns one page of search results into the poster URLs to render.
pub struct PosterPipeline {
    filters: FilterPipeline,
}

impl PosterPipeline {
    pub fn new(filters: FilterPipeline) -> Self {
        Self { filters }
    }

    /// Sort by year, then drop everything a filter rejects.
    pub fn select(&self, mut movies: Vec<MovieSummary>) -> Result<Vec<MovieSummary>> {
        sort_by_year(&mut movies);
        debug!("Sorted {} movies by year", movies.len());
        self.filters.apply(movies)
    }

    /// The `Poster` field of every selected movie, in display order.
    ///
    /// `"N/A"` posters are passed through unchanged.
    pub fn poster_urls(&self, movies: Vec<MovieSummary>) -> Result<Vec<String>> {
        let selected = self.select(movies)?;
        Ok(selected.into_iter().map(|movie| movie.poster).collect())
    }
}

impl Default for PosterPipeline {
    /// Keeps a movie iff its title is not the excluded title AND its type is
    /// not `"game"`.
    fn default() -> Self {
        Self::new(
            FilterPipeline::new()
                .add_filter(ExcludedTitleFilter::default())
                .add_filter(ExcludedTypeFilter::default()),
        )
    }
}

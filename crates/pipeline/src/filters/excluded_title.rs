//! Filter to drop one specific title from the gallery.
//!
//! The default excluded title is the theme-park ride that the
//! "harry potter" search returns alongside the films.

use crate::traits::Filter;
use anyhow::Result;
use catalog::MovieSummary;

pub const EXCLUDED_TITLE: &str = "Harry Potter and the Forbidden Journey";

/// Removes movies whose `Title` exactly equals the excluded title.
///
/// Comparison is case-sensitive with no trimming.
pub struct ExcludedTitleFilter {
    title: String,
}

impl ExcludedTitleFilter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for ExcludedTitleFilter {
    fn default() -> Self {
        Self::new(EXCLUDED_TITLE)
    }
}

impl Filter for ExcludedTitleFilter {
    fn name(&self) -> &str {
        "ExcludedTitleFilter"
    }

    fn apply(&self, movies: Vec<MovieSummary>) -> Result<Vec<MovieSummary>> {
        let filtered: Vec<MovieSummary> = movies
            .into_iter()
            .filter(|movie| movie.title != self.title)
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_title_filter() {
        let movies = vec![
            MovieSummary::new(EXCLUDED_TITLE, "2010", "movie", "ride.jpg"),
            MovieSummary::new("Harry Potter and the Goblet of Fire", "2005", "movie", "hp4.jpg"),
            MovieSummary::new("harry potter and the forbidden journey", "2010", "movie", "lower.jpg"),
        ];

        let filter = ExcludedTitleFilter::default();
        let filtered = filter.apply(movies).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].poster, "hp4.jpg");
        assert_eq!(filtered[1].poster, "lower.jpg");
    }
}

//! Filter to drop one content category, games by default.

use crate::traits::Filter;
use anyhow::Result;
use catalog::{GAME_TYPE, MovieSummary};

/// Removes movies whose `Type` equals the excluded category.
pub struct ExcludedTypeFilter {
    kind: String,
}

impl ExcludedTypeFilter {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

impl Default for ExcludedTypeFilter {
    fn default() -> Self {
        Self::new(GAME_TYPE)
    }
}

impl Filter for ExcludedTypeFilter {
    fn name(&self) -> &str {
        "ExcludedTypeFilter"
    }

    fn apply(&self, movies: Vec<MovieSummary>) -> Result<Vec<MovieSummary>> {
        let filtered: Vec<MovieSummary> = movies
            .into_iter()
            .filter(|movie| movie.kind != self.kind)
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_type_filter() {
        let movies = vec![
            MovieSummary::new("Harry Potter: Quidditch World Cup", "2003", "game", "qwc.jpg"),
            MovieSummary::new("Harry Potter and the Goblet of Fire", "2005", "movie", "hp4.jpg"),
            MovieSummary::new("Harry Potter: Behind the Magic", "2001", "episode", "btm.jpg"),
        ];

        let filter = ExcludedTypeFilter::default();
        let filtered = filter.apply(movies).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].kind, "movie");
        assert_eq!(filtered[1].kind, "episode");
    }

    #[test]
    fn test_custom_type() {
        let movies = vec![
            MovieSummary::new("A", "2001", "series", "a.jpg"),
            MovieSummary::new("B", "2002", "game", "b.jpg"),
        ];

        let filtered = ExcludedTypeFilter::new("series").apply(movies).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "B");
    }
}

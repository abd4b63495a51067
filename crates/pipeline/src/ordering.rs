//! Ordering of search results by release year.

use std::cmp::Ordering;

use catalog::MovieSummary;

/// Compare two movies by their numeric `Year`.
///
/// Empty years count as `0` and so come first. Years that do not coerce to
/// a number compare greater than every numeric year and equal to each
/// other, which keeps the comparison a total order.
pub fn compare_years(a: &MovieSummary, b: &MovieSummary) -> Ordering {
    match (a.year_value(), b.year_value()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort ascending by year. Stable: ties keep their upstream order.
pub fn sort_by_year(movies: &mut [MovieSummary]) {
    movies.sort_by(compare_years);
}

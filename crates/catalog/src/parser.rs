//! Decoding of raw search payloads.
//!
//! Two pieces live here:
//! - turning a response body into a [`SearchResponse`]
//! - coercing the textual `Year` field into a number for ordering

use crate::error::Result;
use crate::types::SearchResponse;

/// Parse a response body into a [`SearchResponse`].
///
/// Only JSON syntax and the types of consumed fields are checked. Whether the
/// `Search` array is present is decided later by
/// [`SearchResponse::into_movies`].
pub fn parse_search_response(body: &[u8]) -> Result<SearchResponse> {
    let response: SearchResponse = serde_json::from_slice(body)?;
    Ok(response)
}

/// Coerce a `Year` string into a number.
///
/// Surrounding whitespace is ignored, and empty or blank text counts as
/// `0`. Returns `None` for anything that is not a plain finite decimal
/// number, such as the `"2011–"` ranges OMDb uses for running series.
pub fn coerce_year(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    // f64's parser also accepts "inf" and "NaN", neither of which is a year
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    const SAMPLE: &str = r#"{
        "Search": [
            {
                "Title": "Harry Potter and the Deathly Hallows: Part 2",
                "Year": "2011",
                "imdbID": "tt1201607",
                "Type": "movie",
                "Poster": "https://m.media-amazon.com/images/M/hp7b.jpg"
            },
            {
                "Title": "Harry Potter and the Forbidden Journey",
                "Year": "2010",
                "imdbID": "tt1756545",
                "Type": "movie",
                "Poster": "N/A"
            }
        ],
        "totalResults": "132",
        "Response": "True"
    }"#;

    #[test]
    fn test_parse_sample_payload() {
        let response = parse_search_response(SAMPLE.as_bytes()).unwrap();
        assert_eq!(response.total_results.as_deref(), Some("132"));

        let movies = response.into_movies().unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].year, "2011");
        assert_eq!(movies[0].kind, "movie");
        assert_eq!(movies[0].imdb_id.as_deref(), Some("tt1201607"));
        assert_eq!(movies[1].poster, "N/A");
    }

    #[test]
    fn test_parse_not_found_payload() {
        let body = br#"{"Response":"False","Error":"Movie not found!"}"#;
        let response = parse_search_response(body).unwrap();
        assert!(matches!(
            response.into_movies(),
            Err(CatalogError::Upstream { .. })
        ));
    }

    #[test]
    fn test_parse_malformed_payload() {
        let result = parse_search_response(b"<html>Service Unavailable</html>");
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_parse_ignores_unknown_and_missing_fields() {
        let body = br#"{"Search":[{"Title":"Only a title","Rated":"PG"}]}"#;
        let movies = parse_search_response(body).unwrap().into_movies().unwrap();
        assert_eq!(movies[0].title, "Only a title");
        assert_eq!(movies[0].year, "");
        assert_eq!(movies[0].poster, "");
    }

    #[test]
    fn test_coerce_year() {
        assert_eq!(coerce_year("2001"), Some(2001.0));
        assert_eq!(coerce_year(" 1999 "), Some(1999.0));
        assert_eq!(coerce_year("2011–"), None);
        assert_eq!(coerce_year("2001-2005"), None);
        assert_eq!(coerce_year(""), Some(0.0));
        assert_eq!(coerce_year("   "), Some(0.0));
        assert_eq!(coerce_year("NaN"), None);
        assert_eq!(coerce_year("inf"), None);
    }
}

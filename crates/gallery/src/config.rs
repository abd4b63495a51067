use omdb_client::{
    DEFAULT_API_KEY, DEFAULT_BASE_URL, DEFAULT_SEARCH, OmdbClient, OmdbError, SearchQuery,
};

use crate::container::GALLERY_ID;

/// Settings for one gallery render.
///
/// Every field defaults to the fixed value the gallery was built around:
/// `http://www.omdbapi.com/?s=harry+potter&apikey=thewdb`, rendered into
/// `#poster-gallery`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Endpoint root, e.g. "http://www.omdbapi.com/"
    pub base_url: String,

    /// Search term sent as `s`
    pub search: String,

    /// API key sent as `apikey`
    pub api_key: String,

    /// Id of the container element in the generated page
    pub container_id: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            search: DEFAULT_SEARCH.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            container_id: GALLERY_ID.to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            search: self.search.clone(),
            api_key: self.api_key.clone(),
        }
    }

    /// Build the HTTP client these settings describe.
    pub fn client(&self) -> Result<OmdbClient, OmdbError> {
        OmdbClient::new(self.base_url.clone(), self.query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GalleryConfig::default();
        assert_eq!(config.base_url, "http://www.omdbapi.com/");
        assert_eq!(config.container_id, "poster-gallery");
        assert_eq!(config.query(), SearchQuery::default());
    }

    #[test]
    fn test_client_uses_config() {
        let config = GalleryConfig {
            search: "goblet of fire".to_string(),
            ..Default::default()
        };

        let client = config.client().unwrap();
        let request = client.build_request().unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://www.omdbapi.com/?s=goblet+of+fire&apikey=thewdb"
        );
    }
}

//! HTTP client for the OMDb movie search endpoint.
//!
//! This crate provides:
//! - [`OmdbClient`], which issues one `GET /?s=<search>&apikey=<key>` request
//!   and decodes the body into a [`SearchResponse`]
//! - [`SearchSource`], the seam the gallery renderer fetches through, so a
//!   fixed response can stand in for the network
//! - [`OmdbError`], separating network, status and decode failures

use std::future::Future;

use catalog::{CatalogError, SearchResponse, parse_search_response};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";
pub const DEFAULT_SEARCH: &str = "harry potter";
pub const DEFAULT_API_KEY: &str = "thewdb";

/// Errors that can occur when querying the search endpoint
#[derive(Error, Debug)]
pub enum OmdbError {
    /// Building, sending or reading the request failed
    #[error("Request to movie API failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Movie API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode movie API response: {0}")]
    Decode(#[from] CatalogError),
}

impl OmdbError {
    /// Short label for the failure class, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Request(_) => "network",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
        }
    }
}

/// Anything that can produce one page of search results.
pub trait SearchSource {
    fn search(&self) -> impl Future<Output = Result<SearchResponse, OmdbError>> + Send;
}

/// A fixed response, served as-is on every call.
impl SearchSource for SearchResponse {
    async fn search(&self) -> Result<SearchResponse, OmdbError> {
        Ok(self.clone())
    }
}

/// Query parameters sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub search: String,
    pub api_key: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            search: DEFAULT_SEARCH.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

/// Client for the OMDb search endpoint.
///
/// No default headers, no timeout, no retries: one request per call.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: Client,
    base_url: String,
    query: SearchQuery,
}

impl OmdbClient {
    /// Create a client for `base_url` (e.g. "http://www.omdbapi.com/").
    pub fn new(base_url: impl Into<String>, query: SearchQuery) -> Result<Self, OmdbError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            query,
        })
    }

    /// Build the GET request without sending it.
    ///
    /// Spaces in the search term are encoded as `+`, so the default query
    /// yields `?s=harry+potter&apikey=thewdb`.
    pub fn build_request(&self) -> Result<reqwest::Request, OmdbError> {
        let request = self
            .http
            .get(&self.base_url)
            .query(&[
                ("s", self.query.search.as_str()),
                ("apikey", self.query.api_key.as_str()),
            ])
            .build()?;
        Ok(request)
    }

    /// Fetch and decode one page of search results.
    pub async fn search(&self) -> Result<SearchResponse, OmdbError> {
        let request = self.build_request()?;
        info!("Searching movie API for '{}'", self.query.search);
        debug!("GET {}", request.url().path());

        let response = self.http.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OmdbError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes from movie API", body.len());

        let parsed = parse_search_response(&body)?;
        Ok(parsed)
    }
}

impl SearchSource for OmdbClient {
    async fn search(&self) -> Result<SearchResponse, OmdbError> {
        OmdbClient::search(self).await
    }
}

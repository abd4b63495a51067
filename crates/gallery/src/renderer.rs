//! # Poster Renderer
//!
//! This module coordinates the whole gallery pipeline:
//! 1. Fetch one page of search results
//! 2. Extract the `Search` array
//! 3. Sort by year
//! 4. Apply filters
//! 5. Map to poster URLs
//! 6. Append one `<img class="poster">` per URL to the container
//!
//! Failures in any step are caught once, at [`PosterRenderer::render_into`],
//! logged, and swallowed. Nothing is appended in that case.

use std::time::Instant;

use anyhow::Context;
use catalog::MovieSummary;
use omdb_client::{OmdbError, SearchSource};
use pipeline::PosterPipeline;
use thiserror::Error;
use tracing::{error, info};

use crate::container::{Container, ImageElement, POSTER_CLASS};

/// Everything that can abort a render
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Fetch(#[from] OmdbError),

    #[error("Failed to prepare posters: {message}")]
    Pipeline { message: String },
}

impl RenderError {
    /// Failure class for log lines: network, status, decode or pipeline.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fetch(err) => err.kind(),
            Self::Pipeline { .. } => "pipeline",
        }
    }
}

impl From<anyhow::Error> for RenderError {
    fn from(err: anyhow::Error) -> Self {
        Self::Pipeline {
            message: format!("{err:#}"),
        }
    }
}

/// Fetches search results and renders their posters into a container.
pub struct PosterRenderer<S> {
    source: S,
    pipeline: PosterPipeline,
}

impl<S: SearchSource> PosterRenderer<S> {
    /// Renderer with the default sort and filters.
    pub fn new(source: S) -> Self {
        Self::with_pipeline(source, PosterPipeline::default())
    }

    pub fn with_pipeline(source: S, pipeline: PosterPipeline) -> Self {
        Self { source, pipeline }
    }

    /// Fetch and decode the working sequence, in upstream order.
    pub async fn fetch_movies(&self) -> Result<Vec<MovieSummary>, RenderError> {
        let response = self.source.search().await?;
        let movies = response.into_movies().map_err(OmdbError::from)?;
        info!("Fetched {} movies", movies.len());
        Ok(movies)
    }

    /// Fetch, sort and filter: the movies that will be rendered, in order.
    pub async fn selected_movies(&self) -> Result<Vec<MovieSummary>, RenderError> {
        let movies = self.fetch_movies().await?;
        let selected = self
            .pipeline
            .select(movies)
            .context("Failed to apply filters")?;
        info!("Applied filters, movies remaining: {}", selected.len());
        Ok(selected)
    }

    /// Run the pipeline and append the posters, reporting failures.
    ///
    /// Returns the number of appended elements. On error the container is
    /// left untouched.
    pub async fn try_render_into<C: Container>(
        &self,
        container: &mut C,
    ) -> Result<usize, RenderError> {
        let start_time = Instant::now();

        let movies = self.fetch_movies().await?;
        let urls = self
            .pipeline
            .poster_urls(movies)
            .context("Failed to map posters")?;

        let count = urls.len();
        for url in urls {
            let mut poster = ImageElement::new();
            poster.set_src(url);
            poster.add_class(POSTER_CLASS);
            container.append_child(poster);
        }

        info!(
            "Rendered {} posters into #{} in {:.2?}",
            count,
            container.id(),
            start_time.elapsed()
        );
        Ok(count)
    }

    /// Entry point: run the pipeline into `container`.
    ///
    /// Never fails. Any error is logged with its kind and otherwise ignored.
    pub async fn render_into<C: Container>(&self, container: &mut C) {
        if let Err(err) = self.try_render_into(container).await {
            error!(kind = err.kind(), "Poster gallery failed: {}", err);
        }
    }
}

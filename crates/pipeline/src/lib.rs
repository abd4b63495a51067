//! Pipeline for ordering and filtering movie search results.
//!
//! This crate provides:
//! - Filter trait and implementations for dropping unwanted entries
//! - FilterPipeline for composing filters
//! - Year ordering
//! - PosterPipeline, which runs sort → filter → map to poster URLs
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::PosterPipeline;
//!
//! let urls = PosterPipeline::default().poster_urls(movies)?;
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod ordering;
pub mod posters;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use ordering::{compare_years, sort_by_year};
pub use posters::PosterPipeline;

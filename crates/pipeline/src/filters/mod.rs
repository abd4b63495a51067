//! Filter implementations for the poster pipeline.
//!
//! This module contains the concrete filters that can be composed into a
//! FilterPipeline.

pub mod excluded_title;
pub mod excluded_type;

// Re-export for convenience
pub use excluded_title::{EXCLUDED_TITLE, ExcludedTitleFilter};
pub use excluded_type::ExcludedTypeFilter;

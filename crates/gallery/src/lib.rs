//! Gallery crate for the poster gallery.
//!
//! This crate contains the renderer that coordinates fetching, the
//! sort/filter pipeline and the container the posters end up in, plus the
//! HTML serialization of that container.

pub mod config;
pub mod container;
pub mod html;
pub mod renderer;

pub use config::GalleryConfig;
pub use container::{Container, GALLERY_ID, GalleryElement, ImageElement, POSTER_CLASS};
pub use html::render_page;
pub use renderer::{PosterRenderer, RenderError};

//! Minimal document model for the poster gallery.
//!
//! The gallery only ever creates `<img>` elements and appends them to one
//! container, so that is all this models.

/// Identifier of the element that receives the posters.
pub const GALLERY_ID: &str = "poster-gallery";

/// Class attached to every rendered poster.
pub const POSTER_CLASS: &str = "poster";

/// An `<img>` element: a `src` attribute plus a class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageElement {
    src: String,
    classes: Vec<String>,
}

impl ImageElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_src(&mut self, src: impl Into<String>) {
        self.src = src.into();
    }

    /// Add a class unless it is already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Anything posters can be appended to.
pub trait Container {
    fn id(&self) -> &str;

    /// Append `image` as the last child.
    fn append_child(&mut self, image: ImageElement);
}

/// In-memory container element, serialized by [`crate::html::render_page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryElement {
    id: String,
    children: Vec<ImageElement>,
}

impl GalleryElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[ImageElement] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Default for GalleryElement {
    fn default() -> Self {
        Self::new(GALLERY_ID)
    }
}

impl Container for GalleryElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn append_child(&mut self, image: ImageElement) {
        self.children.push(image);
    }
}

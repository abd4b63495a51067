//! HTML serialization of a gallery.

use std::borrow::Cow;

use crate::container::{Container, GalleryElement, ImageElement};

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Serialize one image element, e.g. `<img src="a.jpg" class="poster">`.
pub fn render_image(image: &ImageElement) -> String {
    let mut tag = format!("<img src=\"{}\"", escape_attribute(image.src()));
    if !image.classes().is_empty() {
        let classes = image.classes().join(" ");
        tag.push_str(&format!(" class=\"{}\"", escape_attribute(&classes)));
    }
    tag.push('>');
    tag
}

/// Serialize the container element and its children.
pub fn render_gallery(gallery: &GalleryElement) -> String {
    let mut out = format!("<div id=\"{}\">\n", escape_attribute(gallery.id()));
    for image in gallery.children() {
        out.push_str("  ");
        out.push_str(&render_image(image));
        out.push('\n');
    }
    out.push_str("</div>");
    out
}

/// Serialize a complete HTML5 document hosting the gallery.
pub fn render_page(gallery: &GalleryElement, title: &str) -> String {
    let title = escape_attribute(title);
    let body = render_gallery(gallery);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

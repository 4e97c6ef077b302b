use folio_renderer::Heading;
use serde::Serialize;

use crate::menu::MenuNode;
use crate::metadata::DocumentMeta;

/// Fully rendered documentation page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Document {
    /// Attributes declared by the document, over the filename title default.
    pub attrs: DocumentMeta,
    /// Path of the source file relative to the data root, with extension.
    pub filename: String,
    /// Slug the document was requested with.
    pub slug: String,
    /// Rendered HTML body.
    pub html: String,
    /// `h2`/`h3` table of contents.
    pub headings: Vec<Heading>,
    /// Always empty; keeps the menu node shape.
    pub children: Vec<MenuNode>,
}

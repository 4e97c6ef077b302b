//! Markdown renderer with heading table-of-contents extraction.
//!
//! This crate provides a [`MarkdownRenderer`] that turns a markdown document
//! into HTML in a single pass over `pulldown-cmark` events. The same pass:
//!
//! - assigns a unique, slugified `id` to every heading and writes a
//!   self-link anchor into it,
//! - records the `h2`/`h3` headings as a table of contents ([`Heading`]),
//! - returns any YAML metadata block at the top of the document as
//!   renderer-declared attributes.
//!
//! For HTML that was produced elsewhere, [`extract_headings`] recovers the
//! same table of contents from the markup itself.
//!
//! # Example
//!
//! ```
//! use folio_renderer::{HeadingLevel, MarkdownRenderer};
//!
//! let result = MarkdownRenderer::new()
//!     .render_markdown("## Getting Started\n\nHello")
//!     .unwrap();
//!
//! assert_eq!(result.headings.len(), 1);
//! assert_eq!(result.headings[0].heading_level, HeadingLevel::H2);
//! assert_eq!(result.headings[0].slug.as_deref(), Some("getting-started"));
//! assert_eq!(result.headings[0].html, "Getting Started");
//! ```

mod html;
mod renderer;
mod state;
mod toc;
mod util;

pub use renderer::{MarkdownRenderer, RenderError, RenderResult};
pub use state::{escape_html, slugify};
pub use toc::{Heading, HeadingLevel, extract_headings};

//! Documentation menu tree and document pipeline for Folio.
//!
//! This crate provides:
//! - [`Docs`]: the pipeline entry point, with [`Docs::menu`] and [`Docs::doc`]
//! - [`parse_attrs`] and [`make_slug`], the building blocks both operations use
//! - [`doc_slug_for_path`] for mapping request paths to document slugs
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use folio_site::Docs;
//! use folio_storage::FsStorage;
//!
//! let storage = Arc::new(FsStorage::new(PathBuf::from("data")));
//! let docs = Docs::new(storage);
//!
//! // Navigation tree of data/docs
//! let menu = docs.menu()?;
//!
//! // Render data/docs/guides/routing.md
//! let doc = docs.doc("docs/guides/routing")?;
//! # Ok(())
//! # }
//! ```

mod docs;
mod document;
mod error;
mod frontmatter;
mod menu;
mod metadata;
mod route;
mod slug;

pub use docs::{DOCS_DIR, Docs};
pub use document::Document;
pub use error::DocsError;
pub use frontmatter::parse_attrs;
pub use menu::{MenuNode, build_tree};
pub use metadata::DocumentMeta;
pub use route::{CHANGELOG_SLUG, doc_slug_for_path};
pub use slug::make_slug;

// Re-export heading types from folio-renderer for convenience
pub use folio_renderer::{Heading, HeadingLevel};

//! Documentation pipeline entry point.
//!
//! [`Docs`] ties storage, front matter, slug derivation and rendering
//! together. Every call works from the current corpus contents; nothing is
//! cached between calls.

use std::sync::Arc;

use folio_renderer::MarkdownRenderer;
use folio_storage::{MARKDOWN_EXTENSION, Storage};

use crate::document::Document;
use crate::error::DocsError;
use crate::frontmatter::parse_attrs;
use crate::menu::{MenuNode, build_tree};
use crate::slug::make_slug;

/// Directory below the data root holding the documentation pages.
pub const DOCS_DIR: &str = "docs";

/// Documentation pipeline over a markdown corpus.
///
/// Holds only the storage handle, so it can be shared across threads behind
/// an `Arc`.
pub struct Docs {
    storage: Arc<dyn Storage>,
}

impl Docs {
    /// Create a pipeline reading from `storage`, rooted at the data directory.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Build the navigation menu from every page under the docs directory.
    ///
    /// Pages with an empty slug (the docs index) or `hidden: true` are left
    /// out. See [`build_tree`] for the tree shape and ordering.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::Storage`] if the corpus can't be enumerated or a
    /// page can't be read, and [`DocsError::FrontMatter`] if a page has a
    /// malformed header.
    pub fn menu(&self) -> Result<Vec<MenuNode>, DocsError> {
        let files = self.storage.list(DOCS_DIR)?;

        let mut entries = Vec::with_capacity(files.len());
        for filename in files {
            let text = self.storage.read(&format!("{DOCS_DIR}/{filename}"))?;
            let (body, attrs) = parse_attrs(&text, &filename)?;
            let slug = make_slug(&filename);

            if slug.is_empty() || attrs.is_hidden() {
                continue;
            }

            entries.push(MenuNode {
                attrs,
                has_content: !body.is_empty(),
                filename,
                slug,
                children: Vec::new(),
            });
        }

        tracing::debug!(entry_count = entries.len(), "Building menu");
        Ok(build_tree(entries))
    }

    /// Fetch and render a single document.
    ///
    /// `slug` is relative to the data root and includes its directory, e.g.
    /// `docs/guides/routing` or `CHANGELOG`. Hidden pages are fetchable.
    ///
    /// The front matter header is split off exactly as [`menu`](Self::menu)
    /// does and only the body is rendered. Attributes the renderer declares
    /// are merged over the header's.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::NotFound`] if no file backs the slug,
    /// [`DocsError::Storage`] if it can't be read (including slugs that
    /// escape the data root), and [`DocsError::Processing`] if the header or
    /// body can't be processed.
    pub fn doc(&self, slug: &str) -> Result<Document, DocsError> {
        let filename = format!("{slug}.{MARKDOWN_EXTENSION}");

        let markdown = self.storage.read(&filename).map_err(|e| {
            if e.is_not_found() {
                DocsError::NotFound(slug.to_owned())
            } else {
                DocsError::Storage(e)
            }
        })?;

        let processing_error = |message: String| {
            tracing::error!(filename = %filename, error = %message, "Failed to process document");
            DocsError::Processing {
                filename: filename.clone(),
                message,
            }
        };

        let (body, mut attrs) =
            parse_attrs(&markdown, &filename).map_err(|e| processing_error(e.to_string()))?;
        let result = MarkdownRenderer::new()
            .render_markdown(body)
            .map_err(|e| processing_error(e.to_string()))?;
        attrs
            .merge_attributes(result.attributes)
            .map_err(|e| processing_error(e.to_string()))?;

        Ok(Document {
            attrs,
            filename,
            slug: slug.to_owned(),
            html: result.html,
            headings: result.headings,
            children: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    // Docs is shared across request handlers
    static_assertions::assert_impl_all!(super::Docs: Send, Sync);

    use std::fs;

    use folio_renderer::{Heading, HeadingLevel};
    use folio_storage::{FsStorage, MockStorage, StorageErrorKind};
    use pretty_assertions::assert_eq;

    use super::*;

    fn docs(storage: MockStorage) -> Docs {
        Docs::new(Arc::new(storage))
    }

    fn slugs(nodes: &[MenuNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.slug.as_str()).collect()
    }

    // ========================================================================
    // Menu tests
    // ========================================================================

    #[test]
    fn test_menu_tree() {
        let docs = docs(
            MockStorage::new()
                .with_file("docs/index.md", "---\ntitle: Home\n---\nWelcome")
                .with_file("docs/a/index.md", "---\ntitle: A\n---\n")
                .with_file("docs/a/b.md", "---\ntitle: B\n---\nB body")
                .with_file("docs/a/c.md", "---\ntitle: C\n---\nC body")
                .with_file("docs/z.md", "---\ntitle: Z\n---\nZ body"),
        );

        let menu = docs.menu().unwrap();

        assert_eq!(slugs(&menu), vec!["a", "z"]);
        assert_eq!(slugs(&menu[0].children), vec!["a/b", "a/c"]);
        assert_eq!(menu[0].filename, "a/index.md");
        assert_eq!(menu[0].children[0].attrs.title, "B");
    }

    #[test]
    fn test_menu_title_defaults_to_filename() {
        let docs = docs(
            MockStorage::new()
                .with_file("docs/guides/index.md", "No header")
                .with_file("docs/guides/routing.md", "---\norder: 1\n---\nBody"),
        );

        let menu = docs.menu().unwrap();

        assert_eq!(menu[0].attrs.title, "guides/index.md");
        assert_eq!(menu[0].children[0].attrs.title, "guides/routing.md");
    }

    #[test]
    fn test_menu_excludes_hidden() {
        let docs = docs(
            MockStorage::new()
                .with_file("docs/visible.md", "Shown")
                .with_file("docs/secret.md", "---\nhidden: true\n---\nSecret"),
        );

        let menu = docs.menu().unwrap();

        assert_eq!(slugs(&menu), vec!["visible"]);
        assert_eq!(docs.doc("docs/secret").unwrap().html, "<p>Secret</p>");
    }

    #[test]
    fn test_menu_has_content() {
        let docs = docs(
            MockStorage::new()
                .with_file("docs/category.md", "---\ntitle: Category\n---\n")
                .with_file("docs/blank.md", "---\ntitle: Blank\n---\n\n\n")
                .with_file("docs/page.md", "---\ntitle: Page\n---\nText"),
        );

        let menu = docs.menu().unwrap();

        let content: Vec<_> = menu.iter().map(|n| (n.slug.as_str(), n.has_content)).collect();
        assert_eq!(
            content,
            vec![("blank", true), ("category", false), ("page", true)]
        );
    }

    #[test]
    fn test_menu_survives_oddly_typed_attributes() {
        let docs = docs(
            MockStorage::new()
                .with_file("docs/odd.md", "---\nhidden: yes\n---\nx")
                .with_file("docs/quoted.md", "---\norder: \"2\"\n---\nx")
                .with_file("docs/first.md", "---\norder: 1\n---\nx")
                .with_file("docs/zero.md", "---\norder: 0\n---\nx"),
        );

        let menu = docs.menu().unwrap();

        assert_eq!(slugs(&menu), vec!["first", "quoted", "zero"]);
        assert_eq!(menu[1].attrs.order, Some(serde_json::json!("2")));
    }

    #[test]
    fn test_menu_order() {
        let docs = docs(
            MockStorage::new()
                .with_file("docs/first.md", "---\norder: 2\n---\nx")
                .with_file("docs/second.md", "---\norder: 1\n---\nx")
                .with_file("docs/third.md", "x"),
        );

        let menu = docs.menu().unwrap();

        assert_eq!(slugs(&menu), vec!["second", "first", "third"]);
    }

    #[test]
    fn test_menu_enumeration_failure() {
        let docs = docs(
            MockStorage::new()
                .with_file("docs/a.md", "A")
                .with_list_error(StorageErrorKind::PermissionDenied),
        );

        let err = docs.menu().unwrap_err();

        assert!(matches!(err, DocsError::Storage(ref e) if e.kind == StorageErrorKind::PermissionDenied));
    }

    #[test]
    fn test_menu_malformed_front_matter() {
        let docs = docs(MockStorage::new().with_file("docs/bad.md", "---\ntitle: [\n---\n"));

        let err = docs.menu().unwrap_err();

        assert!(matches!(err, DocsError::FrontMatter { ref filename, .. } if filename == "bad.md"));
    }

    #[test]
    fn test_menu_from_filesystem() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs_dir = temp_dir.path().join("docs");
        fs::create_dir_all(docs_dir.join("start")).unwrap();
        fs::write(docs_dir.join("index.md"), "# Docs").unwrap();
        fs::write(docs_dir.join("start/index.md"), "---\ntitle: Start\norder: 1\n---\n").unwrap();
        fs::write(docs_dir.join("start/quickstart.md"), "---\ntitle: Quick Start\n---\n# Go").unwrap();
        fs::write(docs_dir.join("start/.draft.md"), "---\ntitle: Draft\nhidden: true\n---\nx").unwrap();

        let docs = Docs::new(Arc::new(FsStorage::new(temp_dir.path().to_path_buf())));
        let menu = docs.menu().unwrap();

        assert_eq!(slugs(&menu), vec!["start"]);
        assert!(!menu[0].has_content);
        assert_eq!(slugs(&menu[0].children), vec!["start/quickstart"]);
        assert_eq!(menu[0].children[0].filename, "start/quickstart.md");
    }

    // ========================================================================
    // Document tests
    // ========================================================================

    #[test]
    fn test_doc_renders() {
        let docs = docs(MockStorage::new().with_file(
            "docs/guides/routing.md",
            "---\ntitle: Routing\norder: 3\n---\n\n## Nested Routes\n\nText\n\n### Index Routes\n",
        ));

        let doc = docs.doc("docs/guides/routing").unwrap();

        assert_eq!(doc.attrs.title, "Routing");
        assert_eq!(doc.filename, "docs/guides/routing.md");
        assert_eq!(doc.slug, "docs/guides/routing");
        assert!(doc.children.is_empty());
        assert!(doc.html.contains("<p>Text</p>"));
        assert_eq!(
            doc.headings,
            vec![
                Heading {
                    heading_level: HeadingLevel::H2,
                    html: "Nested Routes".to_owned(),
                    slug: Some("nested-routes".to_owned()),
                },
                Heading {
                    heading_level: HeadingLevel::H3,
                    html: "Index Routes".to_owned(),
                    slug: Some("index-routes".to_owned()),
                },
            ]
        );
    }

    #[test]
    fn test_doc_agrees_with_menu_on_front_matter() {
        let docs = docs(
            MockStorage::new()
                .with_file("docs/a.md", "---\n\ntitle: A\n---\nBody")
                .with_file("docs/b.md", "---\n---\nBody")
                .with_file("docs/c.md", "---\ntitle: C\n...\nBody"),
        );

        let menu = docs.menu().unwrap();
        let titles: Vec<_> = menu.iter().map(|n| n.attrs.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "b.md", "C"]);

        let a = docs.doc("docs/a").unwrap();
        assert_eq!(a.attrs.title, "A");
        assert_eq!(a.html, "<p>Body</p>");
        assert!(a.headings.is_empty());

        let b = docs.doc("docs/b").unwrap();
        assert_eq!(b.attrs.title, "docs/b.md");
        assert_eq!(b.html, "<p>Body</p>");

        let c = docs.doc("docs/c").unwrap();
        assert_eq!(c.attrs.title, "C");
        assert_eq!(c.html, "<p>Body</p>");
    }

    #[test]
    fn test_doc_title_defaults_to_filename() {
        let docs = docs(MockStorage::new().with_file("CHANGELOG.md", "# Changes"));

        let doc = docs.doc("CHANGELOG").unwrap();

        assert_eq!(doc.attrs.title, "CHANGELOG.md");
    }

    #[test]
    fn test_doc_missing_is_not_found() {
        let docs = docs(MockStorage::new());

        let err = docs.doc("missing-slug").unwrap_err();

        assert!(matches!(err, DocsError::NotFound(ref slug) if slug == "missing-slug"));
    }

    #[test]
    fn test_doc_rejects_traversal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let data_dir = temp_dir.path().join("data");
        fs::create_dir_all(&data_dir).unwrap();
        fs::write(temp_dir.path().join("secret.md"), "secret").unwrap();

        let docs = Docs::new(Arc::new(FsStorage::new(data_dir)));
        let err = docs.doc("../secret").unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(err, DocsError::Storage(_)));
    }

    #[test]
    fn test_doc_invalid_metadata_is_processing_error() {
        let docs = docs(MockStorage::new().with_file("docs/bad.md", "---\ntitle: [\n---\n\nBody"));

        let err = docs.doc("docs/bad").unwrap_err();

        assert!(matches!(err, DocsError::Processing { ref filename, .. } if filename == "docs/bad.md"));
    }

    #[test]
    fn test_doc_serializes_wire_shape() {
        let docs = docs(MockStorage::new().with_file("docs/a.md", "---\ntitle: A\n---\n\n## Intro"));

        let json = serde_json::to_value(docs.doc("docs/a").unwrap()).unwrap();

        assert_eq!(json["attrs"], serde_json::json!({"title": "A"}));
        assert_eq!(json["filename"], "docs/a.md");
        assert_eq!(json["children"], serde_json::json!([]));
        assert_eq!(
            json["headings"],
            serde_json::json!([{"headingLevel": "h2", "html": "Intro", "slug": "intro"}])
        );
    }
}

//! Request path to document slug mapping.

use crate::docs::DOCS_DIR;

/// Slug of the changelog, which lives outside the docs directory.
pub const CHANGELOG_SLUG: &str = "CHANGELOG";

/// Path suffix that selects the changelog.
const CHANGELOG_SUFFIX: &str = "/changelog";

/// Slug of the docs landing page.
const INDEX_SLUG: &str = "index";

/// Map a path below the `/docs` URL prefix to a document slug.
///
/// A path ending in `/changelog` below some section maps to
/// [`CHANGELOG_SLUG`]; anything else, a bare `changelog` included, maps into
/// the docs directory, with the empty path selecting the docs index.
///
/// # Examples
///
/// ```
/// use folio_site::doc_slug_for_path;
///
/// assert_eq!(doc_slug_for_path(""), "docs/index");
/// assert_eq!(doc_slug_for_path("guides/routing"), "docs/guides/routing");
/// assert_eq!(doc_slug_for_path("start/changelog"), "CHANGELOG");
/// assert_eq!(doc_slug_for_path("changelog"), "docs/changelog");
/// ```
#[must_use]
pub fn doc_slug_for_path(path: &str) -> String {
    let path = path.trim_matches('/');

    if path.ends_with(CHANGELOG_SUFFIX) {
        return CHANGELOG_SLUG.to_owned();
    }

    let path = if path.is_empty() { INDEX_SLUG } else { path };
    format!("{DOCS_DIR}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_is_index() {
        assert_eq!(doc_slug_for_path(""), "docs/index");
        assert_eq!(doc_slug_for_path("/"), "docs/index");
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(doc_slug_for_path("guides/routing"), "docs/guides/routing");
        assert_eq!(doc_slug_for_path("/start/quickstart/"), "docs/start/quickstart");
    }

    #[test]
    fn test_changelog() {
        assert_eq!(doc_slug_for_path("start/changelog"), CHANGELOG_SLUG);
        assert_eq!(doc_slug_for_path("a/b/changelog/"), CHANGELOG_SLUG);
    }

    #[test]
    fn test_bare_changelog_is_docs_page() {
        assert_eq!(doc_slug_for_path("changelog"), "docs/changelog");
        assert_eq!(doc_slug_for_path("/changelog"), "docs/changelog");
    }

    #[test]
    fn test_changelog_must_be_whole_segment() {
        assert_eq!(doc_slug_for_path("guides/changelogs"), "docs/guides/changelogs");
        assert_eq!(doc_slug_for_path("mychangelog"), "docs/mychangelog");
    }
}

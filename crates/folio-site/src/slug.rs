//! File path to URL slug conversion.

use folio_storage::MARKDOWN_EXTENSION;

/// Directory segment that roots documentation paths.
const DOCS_SEGMENT: &str = "docs/";

/// Index page file stem.
const INDEX_SEGMENT: &str = "index";

/// Derive the canonical URL slug of a documentation file.
///
/// Steps, in order:
/// 1. Strip everything up to and including the last `docs/` segment, so
///    paths from prefixed build directories resolve the same.
/// 2. Strip a trailing `.md`.
/// 3. Strip a trailing `index` segment.
/// 4. Strip a trailing `/`.
///
/// # Examples
///
/// ```
/// use folio_site::make_slug;
///
/// assert_eq!(make_slug("docs/guides/index.md"), "guides");
/// assert_eq!(make_slug("docs/index.md"), "");
/// assert_eq!(make_slug("some/build/tmp/docs/a/b.md"), "a/b");
/// ```
#[must_use]
pub fn make_slug(path: &str) -> String {
    let path = strip_docs_prefix(path);
    let path = path
        .strip_suffix(MARKDOWN_EXTENSION)
        .and_then(|p| p.strip_suffix('.'))
        .unwrap_or(path);
    let path = if path == INDEX_SEGMENT {
        ""
    } else {
        path.strip_suffix(INDEX_SEGMENT)
            .filter(|p| p.ends_with('/'))
            .unwrap_or(path)
    };
    path.strip_suffix('/').unwrap_or(path).to_owned()
}

/// Remainder of `path` after its last `docs/` segment.
fn strip_docs_prefix(path: &str) -> &str {
    path.rmatch_indices(DOCS_SEGMENT)
        .find(|(i, _)| *i == 0 || path.as_bytes()[i - 1] == b'/')
        .map_or(path, |(i, m)| &path[i + m.len()..])
}

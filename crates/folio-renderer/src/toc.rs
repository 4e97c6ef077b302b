//! Table-of-contents types and HTML heading extraction.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// `<h2>`/`<h3>` elements with their attribute string and inner markup.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<(h[23])\b([^>]*)>(.*?)</h[23]\s*>").unwrap());

/// `id` attribute inside an opening tag, quoted or bare.
static ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|\s)id\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap()
});

/// Anchor elements including their content.
static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b[^>]*>.*?</a\s*>").unwrap());

/// Heading levels that take part in the table of contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeadingLevel {
    /// Second-level heading.
    H2,
    /// Third-level heading.
    H3,
}

impl HeadingLevel {
    /// Map a numeric heading level, keeping only levels 2 and 3.
    #[must_use]
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            _ => None,
        }
    }

    /// Tag name of the heading element.
    #[must_use]
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::H2 => "h2",
            Self::H3 => "h3",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Heading {
    /// Heading element (`h2` or `h3`).
    pub heading_level: HeadingLevel,
    /// Inner markup of the heading with anchor elements removed.
    pub html: String,
    /// DOM id of the heading, if it has one.
    pub slug: Option<String>,
}

/// Extract the `h2`/`h3` table of contents from an HTML fragment.
///
/// Headings are returned in document order. Anchor elements are removed
/// from the captured markup together with their content, so the result can
/// be reused as a link label without nesting interactive elements.
///
/// # Example
///
/// ```
/// use folio_renderer::{HeadingLevel, extract_headings};
///
/// let headings = extract_headings(r#"<h2 id="x"><a>#</a>Title</h2>"#);
/// assert_eq!(headings[0].heading_level, HeadingLevel::H2);
/// assert_eq!(headings[0].slug.as_deref(), Some("x"));
/// assert_eq!(headings[0].html, "Title");
/// ```
#[must_use]
pub fn extract_headings(html: &str) -> Vec<Heading> {
    HEADING_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let heading_level = match caps[1].to_ascii_lowercase().as_str() {
                "h2" => HeadingLevel::H2,
                "h3" => HeadingLevel::H3,
                _ => return None,
            };
            let slug = ID_RE.captures(&caps[2]).and_then(|id| {
                id.get(1)
                    .or_else(|| id.get(2))
                    .or_else(|| id.get(3))
                    .map(|m| m.as_str().to_owned())
            });
            let html = ANCHOR_RE.replace_all(&caps[3], "").trim().to_owned();

            Some(Heading {
                heading_level,
                html,
                slug,
            })
        })
        .collect()
}

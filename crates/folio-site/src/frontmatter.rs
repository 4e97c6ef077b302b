//! YAML front matter splitting.

use crate::error::DocsError;
use crate::metadata::DocumentMeta;

/// Front matter delimiter line.
const DELIMITER: &str = "---";

/// YAML end-of-document marker, also accepted as the closing line.
const END_MARKER: &str = "...";

/// Split a markdown file into its YAML header and body.
///
/// The header starts with a `---` line on the first line of the file and ends
/// at the next `---` or `...` line. Returns `None` when the file doesn't open
/// with a delimiter or the header is never closed.
fn split(text: &str) -> Option<(&str, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if matches!(line.trim_end(), DELIMITER | END_MARKER) {
            return Some((&text[yaml_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

/// Parse a markdown file into body and attributes.
///
/// `filename` is the fallback title; it is never parsed from the content.
/// Without a front matter header the whole text is the body.
///
/// # Errors
///
/// Returns [`DocsError::FrontMatter`] if the header is not valid YAML or
/// declares a non-scalar title.
///
/// # Example
///
/// ```
/// use folio_site::parse_attrs;
///
/// let (body, attrs) = parse_attrs("---\norder: 2\n---\nHello", "intro.md").unwrap();
/// assert_eq!(body, "Hello");
/// assert_eq!(attrs.title, "intro.md");
/// ```
pub fn parse_attrs<'a>(text: &'a str, filename: &str) -> Result<(&'a str, DocumentMeta), DocsError> {
    let Some((yaml, body)) = split(text) else {
        return Ok((text, DocumentMeta::with_title(filename)));
    };

    let front_matter_error = |source| DocsError::FrontMatter {
        filename: filename.to_owned(),
        source,
    };

    let attributes = if yaml.trim().is_empty() {
        None
    } else {
        Some(serde_yaml::from_str::<serde_yaml::Value>(yaml).map_err(front_matter_error)?)
    };
    let attrs = DocumentMeta::from_attributes(filename, attributes).map_err(front_matter_error)?;

    Ok((body, attrs))
}

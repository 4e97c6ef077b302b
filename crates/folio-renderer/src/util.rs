//! Shared utility functions for markdown rendering.

use pulldown_cmark::{HeadingLevel, Options};

/// Parser options used for documentation pages.
///
/// GitHub-flavored markdown plus YAML metadata blocks for front matter and
/// `{#id}` heading attributes.
#[must_use]
pub(crate) fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
        | Options::ENABLE_HEADING_ATTRIBUTES
        | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
}

/// Convert heading level enum to number (1-6).
#[must_use]
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Language of a fenced code block from its info string.
///
/// Only the first word names the language; the rest (`title=...`, line
/// highlights) is ignored.
pub(crate) fn fence_language(info: &str) -> Option<String> {
    info.split_whitespace()
        .next()
        .map(|lang| lang.trim_start_matches('{').trim_end_matches('}'))
        .filter(|lang| !lang.is_empty())
        .map(str::to_owned)
}

/// Classify an inline HTML fragment as an anchor open (`Some(true)`) or
/// close (`Some(false)`) tag.
pub(crate) fn anchor_tag_kind(html: &str) -> Option<bool> {
    let tag = html.trim_start().to_ascii_lowercase();
    if tag.starts_with("</a>") || tag.starts_with("</a ") {
        Some(false)
    } else if tag.starts_with("<a>") || tag.starts_with("<a ") || tag.starts_with("<a\n") {
        Some(true)
    } else {
        None
    }
}

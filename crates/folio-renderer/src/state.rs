//! State structs for markdown rendering.
//!
//! These structs track context while the renderer walks parser events.

use std::collections::{HashMap, HashSet};

use pulldown_cmark::Alignment;

use crate::toc::{Heading, HeadingLevel};

/// Fallback id for headings whose text has no slug characters.
const EMPTY_HEADING_ID: &str = "section";

/// State for tracking code block rendering.
#[derive(Default)]
pub struct CodeBlockState {
    /// Whether we're inside a code block.
    active: bool,
    /// Language of current code block (e.g., "rust", "tsx").
    language: Option<String>,
    /// Buffer for code block content.
    buffer: String,
}

impl CodeBlockState {
    /// Start a new code block with optional language.
    pub fn start(&mut self, language: Option<String>) {
        self.active = true;
        self.language = language;
        self.buffer.clear();
    }

    /// End the current code block and return (language, content).
    pub fn end(&mut self) -> (Option<String>, String) {
        self.active = false;
        (self.language.take(), std::mem::take(&mut self.buffer))
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn push_newline(&mut self) {
        self.buffer.push('\n');
    }
}

/// State for tracking table rendering.
#[derive(Default)]
pub struct TableState {
    /// Whether we're inside the table header row.
    in_head: bool,
    /// Column alignments for current table.
    alignments: Vec<Alignment>,
    /// Current column index in table row.
    cell_index: usize,
}

impl TableState {
    /// Start a new table with column alignments.
    pub fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell_index = 0;
    }

    pub fn start_head(&mut self) {
        self.in_head = true;
        self.cell_index = 0;
    }

    pub fn end_head(&mut self) {
        self.in_head = false;
    }

    pub fn start_row(&mut self) {
        self.cell_index = 0;
    }

    pub fn next_cell(&mut self) {
        self.cell_index += 1;
    }

    pub fn is_in_head(&self) -> bool {
        self.in_head
    }

    /// Get the alignment style for the current cell.
    pub fn current_alignment_style(&self) -> &'static str {
        match self.alignments.get(self.cell_index) {
            Some(Alignment::Left) => r#" style="text-align:left""#,
            Some(Alignment::Center) => r#" style="text-align:center""#,
            Some(Alignment::Right) => r#" style="text-align:right""#,
            Some(Alignment::None) | None => "",
        }
    }
}

/// State for tracking image alt text capture.
#[derive(Default)]
pub struct ImageState {
    active: bool,
    alt_text: String,
}

impl ImageState {
    pub fn start(&mut self) {
        self.active = true;
        self.alt_text.clear();
    }

    /// End image capture and return the alt text.
    pub fn end(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.alt_text)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn push_str(&mut self, text: &str) {
        self.alt_text.push_str(text);
    }
}

/// State for capturing a YAML metadata block at the top of the document.
#[derive(Default)]
pub struct MetadataState {
    active: bool,
    seen: bool,
    buffer: String,
}

impl MetadataState {
    pub fn start(&mut self) {
        self.active = true;
        self.seen = true;
    }

    pub fn end(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Take the captured block source, if the document had one.
    pub fn take(&mut self) -> Option<String> {
        if std::mem::take(&mut self.seen) {
            Some(std::mem::take(&mut self.buffer))
        } else {
            None
        }
    }
}

/// A heading that has been fully captured.
#[derive(Debug, PartialEq, Eq)]
pub struct CompletedHeading {
    /// Heading level (1-6).
    pub level: u8,
    /// Unique DOM id.
    pub id: String,
    /// Inner markup, including any links.
    pub html: String,
}

/// State for tracking headings, their ids and the table of contents.
#[derive(Default)]
pub struct HeadingState {
    /// Current heading level being processed (None if not in a heading).
    current_level: Option<u8>,
    /// Id given with `{#id}` heading attribute syntax.
    explicit_id: Option<String>,
    /// Buffer for heading plain text (for the slug).
    text: String,
    /// Buffer for heading HTML (with inline formatting).
    html: String,
    /// Buffer for heading HTML with anchor elements left out.
    toc_html: String,
    /// Nesting depth of anchor elements inside the current heading.
    link_depth: usize,
    /// Table of contents entries.
    toc: Vec<Heading>,
    /// Next suffix to try per base id.
    id_counts: HashMap<String, usize>,
    /// Ids already assigned in this document.
    used_ids: HashSet<String>,
}

impl HeadingState {
    /// Check if we're currently inside a heading.
    pub fn is_active(&self) -> bool {
        self.current_level.is_some()
    }

    /// Start tracking a heading.
    pub fn start_heading(&mut self, level: u8, explicit_id: Option<String>) {
        self.current_level = Some(level);
        self.explicit_id = explicit_id;
        self.text.clear();
        self.html.clear();
        self.toc_html.clear();
        self.link_depth = 0;
    }

    /// Complete heading and record a table of contents entry for h2/h3.
    ///
    /// Returns `None` if not in a heading.
    pub fn complete_heading(&mut self) -> Option<CompletedHeading> {
        let level = self.current_level.take()?;
        let text = std::mem::take(&mut self.text);
        let html = std::mem::take(&mut self.html).trim().to_owned();
        let toc_html = std::mem::take(&mut self.toc_html);

        let base_id = match self.explicit_id.take() {
            Some(id) if !id.is_empty() => id,
            _ => match slugify(&text) {
                slug if slug.is_empty() => EMPTY_HEADING_ID.to_owned(),
                slug => slug,
            },
        };
        let id = self.generate_id(base_id);

        if let Some(heading_level) = HeadingLevel::from_level(level) {
            self.toc.push(Heading {
                heading_level,
                html: toc_html.trim().to_owned(),
                slug: Some(id.clone()),
            });
        }

        Some(CompletedHeading { level, id, html })
    }

    /// Generate a unique id for a heading.
    ///
    /// Repeated ids get a numeric suffix (`faq`, `faq-1`, `faq-2`), skipping
    /// suffixed ids that some other heading already produced.
    fn generate_id(&mut self, base_id: String) -> String {
        let mut n = self.id_counts.get(&base_id).copied().unwrap_or(0);
        loop {
            let candidate = match n {
                0 => base_id.clone(),
                n => format!("{base_id}-{n}"),
            };
            n += 1;
            if self.used_ids.insert(candidate.clone()) {
                self.id_counts.insert(base_id, n);
                return candidate;
            }
        }
    }

    /// Append plain text used for the heading slug.
    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Append HTML to the heading buffers.
    ///
    /// Content inside anchor elements never reaches the table of contents.
    pub fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
        if self.link_depth == 0 {
            self.toc_html.push_str(html);
        }
    }

    /// Open an anchor element inside the heading.
    pub fn start_link(&mut self, tag: &str) {
        self.html.push_str(tag);
        self.link_depth += 1;
    }

    /// Close an anchor element inside the heading.
    pub fn end_link(&mut self) {
        self.html.push_str("</a>");
        self.link_depth = self.link_depth.saturating_sub(1);
    }

    /// Take the table of contents entries.
    pub fn take_toc(&mut self) -> Vec<Heading> {
        std::mem::take(&mut self.toc)
    }
}

/// Convert text to URL-safe slug.
///
/// Converts to lowercase, replaces whitespace/dashes/underscores with single dashes,
/// and removes other non-alphanumeric characters.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true; // Prevents leading dash

    for c in text.trim().chars() {
        if c.is_alphanumeric() {
            result.extend(c.to_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn heading(state: &mut HeadingState, level: u8, text: &str) -> CompletedHeading {
        state.start_heading(level, None);
        state.push_text(text);
        state.push_html(&escape_html(text));
        state.complete_heading().unwrap()
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("What's New?"), "whats-new");
        assert_eq!(slugify("  Spaces  "), "spaces");
        assert_eq!(slugify("Multiple   Spaces"), "multiple-spaces");
        assert_eq!(slugify("kebab-case"), "kebab-case");
        assert_eq!(slugify("snake_case"), "snake-case");
        assert_eq!(slugify("Über Straße"), "über-straße");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_code_block_state() {
        let mut state = CodeBlockState::default();
        assert!(!state.is_active());

        state.start(Some("tsx".to_owned()));
        assert!(state.is_active());

        state.push_str("export default function Root() {}");
        let (lang, content) = state.end();
        assert_eq!(lang, Some("tsx".to_owned()));
        assert_eq!(content, "export default function Root() {}");
        assert!(!state.is_active());
    }

    #[test]
    fn test_table_state() {
        let mut state = TableState::default();
        state.start(vec![Alignment::Left, Alignment::Center, Alignment::None]);

        state.start_head();
        assert!(state.is_in_head());
        assert_eq!(state.current_alignment_style(), r#" style="text-align:left""#);

        state.next_cell();
        assert_eq!(state.current_alignment_style(), r#" style="text-align:center""#);

        state.next_cell();
        assert_eq!(state.current_alignment_style(), "");

        state.end_head();
        assert!(!state.is_in_head());
    }

    #[test]
    fn test_image_state() {
        let mut state = ImageState::default();
        state.start();
        assert!(state.is_active());

        state.push_str("alt text");
        assert_eq!(state.end(), "alt text");
        assert!(!state.is_active());
    }

    #[test]
    fn test_metadata_state() {
        let mut state = MetadataState::default();
        assert_eq!(state.take(), None);

        state.start();
        state.push_str("title: Routing\n");
        state.end();

        assert_eq!(state.take(), Some("title: Routing\n".to_owned()));
        assert_eq!(state.take(), None);
    }

    #[test]
    fn test_heading_ids_deduplicated() {
        let mut state = HeadingState::default();

        let ids: Vec<_> = ["FAQ", "FAQ", "FAQ"]
            .iter()
            .map(|text| heading(&mut state, 2, text).id)
            .collect();

        assert_eq!(ids, vec!["faq", "faq-1", "faq-2"]);
    }

    #[test]
    fn test_heading_ids_skip_taken_suffix() {
        let mut state = HeadingState::default();

        let ids: Vec<_> = ["FAQ 1", "FAQ", "FAQ"]
            .iter()
            .map(|text| heading(&mut state, 2, text).id)
            .collect();

        assert_eq!(ids, vec!["faq-1", "faq", "faq-2"]);
    }

    #[test]
    fn test_heading_explicit_id() {
        let mut state = HeadingState::default();

        state.start_heading(2, Some("custom".to_owned()));
        state.push_text("Anything");
        let completed = state.complete_heading().unwrap();

        assert_eq!(completed.id, "custom");
    }

    #[test]
    fn test_heading_without_slug_characters() {
        let mut state = HeadingState::default();

        assert_eq!(heading(&mut state, 2, "???").id, "section");
        assert_eq!(heading(&mut state, 2, "!!!").id, "section-1");
    }

    #[test]
    fn test_toc_records_h2_and_h3_only() {
        let mut state = HeadingState::default();
        heading(&mut state, 1, "Title");
        heading(&mut state, 2, "Two");
        heading(&mut state, 3, "Three");
        heading(&mut state, 4, "Four");

        let toc = state.take_toc();

        assert_eq!(
            toc,
            vec![
                Heading {
                    heading_level: HeadingLevel::H2,
                    html: "Two".to_owned(),
                    slug: Some("two".to_owned()),
                },
                Heading {
                    heading_level: HeadingLevel::H3,
                    html: "Three".to_owned(),
                    slug: Some("three".to_owned()),
                },
            ]
        );
    }

    #[test]
    fn test_toc_leaves_out_links() {
        let mut state = HeadingState::default();
        state.start_heading(2, None);
        state.push_html("See ");
        state.start_link(r#"<a href="/api">"#);
        state.push_text("API");
        state.push_html("API");
        state.end_link();
        state.push_html(" docs");
        let completed = state.complete_heading().unwrap();

        assert_eq!(completed.html, r#"See <a href="/api">API</a> docs"#);
        assert_eq!(state.take_toc()[0].html, "See  docs");
    }

    #[test]
    fn test_complete_without_heading() {
        let mut state = HeadingState::default();

        assert!(state.complete_heading().is_none());
    }
}

//! Markdown renderer producing HTML, metadata attributes and headings.

use std::fmt::Write;

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

use crate::html;
use crate::state::{
    CodeBlockState, HeadingState, ImageState, MetadataState, TableState, escape_html,
};
use crate::toc::Heading;
use crate::util::{anchor_tag_kind, fence_language, heading_level_to_num, parser_options};

/// Error produced while rendering a document.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The YAML metadata block at the top of the document is malformed.
    #[error("invalid metadata block: {0}")]
    Metadata(#[from] serde_yaml::Error),
}

/// Result of rendering markdown.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML content.
    pub html: String,
    /// Attributes declared in the document's YAML metadata block.
    ///
    /// `None` when the document has no metadata block or the block is empty.
    pub attributes: Option<serde_yaml::Value>,
    /// `h2`/`h3` table of contents in document order.
    pub headings: Vec<Heading>,
}

/// Markdown to HTML renderer.
///
/// Handles common elements (tables, lists, inline formatting) and gives
/// every heading a unique id and self-link anchor while collecting the
/// table of contents.
#[derive(Default)]
pub struct MarkdownRenderer {
    output: String,
    /// Code block rendering state.
    code: CodeBlockState,
    /// Table rendering state.
    table: TableState,
    /// Image alt text capture state.
    image: ImageState,
    /// Heading id and table of contents state.
    heading: HeadingState,
    /// YAML metadata block capture.
    metadata: MetadataState,
    /// Pending image data (src, title) waiting for alt text.
    pending_image: Option<(String, String)>,
}

impl MarkdownRenderer {
    /// Create a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            ..Self::default()
        }
    }

    /// Parse and render a markdown document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Metadata`] if the document starts with a YAML
    /// metadata block that is not valid YAML.
    pub fn render_markdown(&mut self, markdown: &str) -> Result<RenderResult, RenderError> {
        let parser = Parser::new_ext(markdown, parser_options());
        self.render(parser)
    }

    /// Render markdown events and return the result.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Metadata`] if the events carry a metadata
    /// block that is not valid YAML.
    pub fn render<'a, I>(&mut self, events: I) -> Result<RenderResult, RenderError>
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }

        let html = std::mem::take(&mut self.output);
        let headings = self.heading.take_toc();
        let attributes = match self.metadata.take() {
            Some(source) if !source.trim().is_empty() => {
                match serde_yaml::from_str::<serde_yaml::Value>(&source)? {
                    serde_yaml::Value::Null => None,
                    value => Some(value),
                }
            }
            _ => None,
        };

        Ok(RenderResult {
            html,
            attributes,
            headings,
        })
    }

    /// Push content to output or heading buffer based on context.
    fn push_inline(&mut self, content: &str) {
        if self.heading.is_active() {
            self.heading.push_html(content);
        } else {
            self.output.push_str(content);
        }
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) => self.output.push_str(&html),
            Event::InlineHtml(html) => self.inline_html(&html),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.push_inline("<br>"),
            Event::Rule => self.output.push_str("<hr>"),
            Event::TaskListMarker(checked) => html::task_list_marker(checked, &mut self.output),
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                // Not supported
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if !self.code.is_active() {
                    self.output.push_str("<p>");
                }
            }
            Tag::Heading { level, id, .. } => {
                // Opening tag is written in end_tag after we have the id.
                self.heading
                    .start_heading(heading_level_to_num(level), id.map(|id| id.to_string()));
            }
            Tag::BlockQuote(kind) => html::blockquote_start(kind, &mut self.output),
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(ref info) => fence_language(info),
                    CodeBlockKind::Indented => None,
                };
                self.code.start(lang);
            }
            Tag::List(start) => match start {
                Some(1) => self.output.push_str("<ol>"),
                Some(n) => write!(self.output, r#"<ol start="{n}">"#).unwrap(),
                None => self.output.push_str("<ul>"),
            },
            Tag::Item => self.output.push_str("<li>"),
            Tag::MetadataBlock(_) => self.metadata.start(),
            Tag::FootnoteDefinition(_) | Tag::HtmlBlock => {}
            Tag::DefinitionList => self.output.push_str("<dl>"),
            Tag::DefinitionListTitle => self.output.push_str("<dt>"),
            Tag::DefinitionListDefinition => self.output.push_str("<dd>"),
            Tag::Table(alignments) => {
                self.table.start(alignments);
                self.output.push_str("<table>");
            }
            Tag::TableHead => {
                self.table.start_head();
                self.output.push_str("<thead><tr>");
            }
            Tag::TableRow => {
                self.table.start_row();
                self.output.push_str("<tr>");
            }
            Tag::TableCell => {
                let align = self.table.current_alignment_style();
                let tag = if self.table.is_in_head() { "th" } else { "td" };
                write!(self.output, "<{tag}{align}>").unwrap();
            }
            Tag::Emphasis => self.push_inline("<em>"),
            Tag::Strong => self.push_inline("<strong>"),
            Tag::Strikethrough => self.push_inline("<s>"),
            Tag::Superscript => self.push_inline("<sup>"),
            Tag::Subscript => self.push_inline("<sub>"),
            Tag::Link {
                dest_url, title, ..
            } => {
                let link_tag = html::link_start(&dest_url, &title);
                if self.heading.is_active() {
                    self.heading.start_link(&link_tag);
                } else {
                    self.output.push_str(&link_tag);
                }
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                // Start collecting alt text; image will be rendered in end_tag
                self.image.start();
                self.pending_image = Some((dest_url.to_string(), title.to_string()));
            }
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                if !self.code.is_active() {
                    self.output.push_str("</p>");
                }
            }
            TagEnd::Heading(_) => {
                if let Some(heading) = self.heading.complete_heading() {
                    let level = heading.level;
                    write!(
                        self.output,
                        r#"<h{level} id="{}">{}{}</h{level}>"#,
                        escape_html(&heading.id),
                        html::heading_anchor(&heading.id),
                        heading.html
                    )
                    .unwrap();
                }
            }
            TagEnd::BlockQuote(kind) => html::blockquote_end(kind, &mut self.output),
            TagEnd::CodeBlock => {
                let (lang, content) = self.code.end();
                html::code_block(lang.as_deref(), &content, &mut self.output);
            }
            TagEnd::List(ordered) => {
                self.output
                    .push_str(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => self.output.push_str("</li>"),
            TagEnd::MetadataBlock(_) => self.metadata.end(),
            TagEnd::FootnoteDefinition | TagEnd::HtmlBlock => {}
            TagEnd::Image => {
                let alt = self.image.end();
                if let Some((src, title)) = self.pending_image.take() {
                    let mut img = String::new();
                    html::image(&src, &alt, &title, &mut img);
                    self.push_inline(&img);
                }
            }
            TagEnd::DefinitionList => self.output.push_str("</dl>"),
            TagEnd::DefinitionListTitle => self.output.push_str("</dt>"),
            TagEnd::DefinitionListDefinition => self.output.push_str("</dd>"),
            TagEnd::Table => self.output.push_str("</tbody></table>"),
            TagEnd::TableHead => {
                self.output.push_str("</tr></thead><tbody>");
                self.table.end_head();
            }
            TagEnd::TableRow => self.output.push_str("</tr>"),
            TagEnd::TableCell => {
                self.output.push_str(if self.table.is_in_head() {
                    "</th>"
                } else {
                    "</td>"
                });
                self.table.next_cell();
            }
            TagEnd::Emphasis => self.push_inline("</em>"),
            TagEnd::Strong => self.push_inline("</strong>"),
            TagEnd::Strikethrough => self.push_inline("</s>"),
            TagEnd::Superscript => self.push_inline("</sup>"),
            TagEnd::Subscript => self.push_inline("</sub>"),
            TagEnd::Link => {
                if self.heading.is_active() {
                    self.heading.end_link();
                } else {
                    self.output.push_str("</a>");
                }
            }
        }
    }

    fn text(&mut self, text: &str) {
        // Priority: metadata > code > image > heading > normal text
        if self.metadata.is_active() {
            self.metadata.push_str(text);
            return;
        }

        if self.code.is_active() {
            self.code.push_str(text);
            return;
        }

        if self.image.is_active() {
            self.image.push_str(text);
            return;
        }

        if self.heading.is_active() {
            self.heading.push_text(text);
            self.heading.push_html(&escape_html(text));
            return;
        }

        self.output.push_str(&escape_html(text));
    }

    fn inline_code(&mut self, code: &str) {
        if self.image.is_active() {
            self.image.push_str(code);
            return;
        }

        let markup = format!("<code>{}</code>", escape_html(code));
        if self.heading.is_active() {
            self.heading.push_text(code);
            self.heading.push_html(&markup);
        } else {
            self.output.push_str(&markup);
        }
    }

    fn inline_html(&mut self, html: &str) {
        if !self.heading.is_active() {
            self.output.push_str(html);
            return;
        }

        match anchor_tag_kind(html) {
            Some(true) => self.heading.start_link(html),
            Some(false) => self.heading.end_link(),
            None => self.heading.push_html(html),
        }
    }

    fn soft_break(&mut self) {
        if self.code.is_active() {
            self.code.push_newline();
        } else if self.heading.is_active() {
            self.heading.push_text(" ");
            self.heading.push_html("\n");
        } else {
            self.output.push('\n');
        }
    }
}

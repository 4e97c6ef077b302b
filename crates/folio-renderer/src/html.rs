//! HTML fragments for block-level elements.
//!
//! Produces semantic HTML5 output suitable for web display.

use std::fmt::Write;

use pulldown_cmark::BlockQuoteKind;

use crate::state::escape_html;

/// Write a fenced or indented code block.
pub(crate) fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
    if let Some(lang) = lang {
        write!(
            out,
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(lang),
            escape_html(content)
        )
        .unwrap();
    } else {
        write!(out, "<pre><code>{}</code></pre>", escape_html(content)).unwrap();
    }
}

/// Open a blockquote, or a GitHub-style alert (`> [!NOTE]`).
pub(crate) fn blockquote_start(kind: Option<BlockQuoteKind>, out: &mut String) {
    let Some(kind) = kind else {
        out.push_str("<blockquote>");
        return;
    };
    let (class, title) = match kind {
        BlockQuoteKind::Note => ("note", "Note"),
        BlockQuoteKind::Tip => ("tip", "Tip"),
        BlockQuoteKind::Important => ("important", "Important"),
        BlockQuoteKind::Warning => ("warning", "Warning"),
        BlockQuoteKind::Caution => ("caution", "Caution"),
    };
    write!(
        out,
        r#"<div class="alert alert-{class}"><p class="alert-title">{title}</p>"#
    )
    .unwrap();
}

pub(crate) fn blockquote_end(kind: Option<BlockQuoteKind>, out: &mut String) {
    out.push_str(if kind.is_some() {
        "</div>"
    } else {
        "</blockquote>"
    });
}

/// Write an image element.
pub(crate) fn image(src: &str, alt: &str, title: &str, out: &mut String) {
    let title_attr = if title.is_empty() {
        String::new()
    } else {
        format!(r#" title="{}""#, escape_html(title))
    };
    write!(
        out,
        r#"<img src="{}"{title_attr} alt="{}">"#,
        escape_html(src),
        escape_html(alt)
    )
    .unwrap();
}

/// Opening anchor tag for a link.
pub(crate) fn link_start(href: &str, title: &str) -> String {
    if title.is_empty() {
        format!(r#"<a href="{}">"#, escape_html(href))
    } else {
        format!(
            r#"<a href="{}" title="{}">"#,
            escape_html(href),
            escape_html(title)
        )
    }
}

/// Self-link placed at the start of every heading.
pub(crate) fn heading_anchor(id: &str) -> String {
    format!(
        r##"<a class="anchor" href="#{}" aria-hidden="true">#</a>"##,
        escape_html(id)
    )
}

pub(crate) fn task_list_marker(checked: bool, out: &mut String) {
    if checked {
        out.push_str(r#"<input type="checkbox" checked disabled> "#);
    } else {
        out.push_str(r#"<input type="checkbox" disabled> "#);
    }
}

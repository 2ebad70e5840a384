//! Markdown content rendering.
//!
//! Converts a document's markdown body to HTML with pulldown-cmark. Beyond
//! CommonMark the renderer enables tables, footnotes, strikethrough, task
//! lists and `{#id .class}` heading attributes.

use crate::metadata::{self, Metadata};
use pulldown_cmark::{Options, Parser, html as md_html};
use std::path::Path;

/// A document after front matter splitting and markdown conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    /// Front matter `title`, or the file stem.
    pub title: String,
    pub html: String,
    pub metadata: Metadata,
}

fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Convert a markdown body to HTML.
pub fn markdown_to_html(body: &str) -> String {
    let parser = Parser::new_ext(body, markdown_options());
    let mut html = String::with_capacity(body.len() * 3 / 2);
    md_html::push_html(&mut html, parser);
    html
}

/// Split front matter off `text` and render the body.
///
/// `path` is only used for the title fallback and log messages.
pub fn render_document(path: &Path, text: &str) -> RenderedDocument {
    let (metadata, body) = metadata::parse_document(text, &path.display().to_string());
    let title = metadata.title().unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    });
    RenderedDocument {
        title,
        html: markdown_to_html(body),
        metadata,
    }
}

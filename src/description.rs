//! Meta description extraction.
//!
//! Each page gets a `<meta name="description">` value of at most
//! `max_length` characters. Resolution order:
//!
//! 1. Front matter `description`, verbatim, if non-empty and short enough.
//! 2. The rendered body as plain text (tags stripped, entities decoded,
//!    whitespace collapsed), if short enough.
//! 3. The first sentence of that text (up to and including the first `.`,
//!    `!` or `?`), if short enough.
//! 4. The text cut to `max_length - 3` characters plus `...`, backing off to
//!    the last space when that space lies beyond 70% of `max_length`.
//!
//! Lengths are counted in characters, not bytes. Everything here is pure.

use crate::metadata::Metadata;

/// Default description bound, the usual search-snippet length.
pub const DEFAULT_MAX_LENGTH: usize = 160;

const ELLIPSIS: &str = "...";
const WORD_BOUNDARY_RATIO: f64 = 0.7;

/// Derive a bounded-length description for a page.
pub fn extract_description(metadata: &Metadata, body_html: &str, max_length: usize) -> String {
    if let Some(description) = metadata.description()
        && !description.is_empty()
        && char_len(&description) <= max_length
    {
        return description;
    }

    let text = plain_text(body_html);
    if char_len(&text) <= max_length {
        return text;
    }

    if let Some(end) = text.find(['.', '!', '?']) {
        let sentence = &text[..=end];
        if char_len(sentence) <= max_length {
            return sentence.to_string();
        }
    }

    truncate_at_word(&text, max_length)
}

/// Strip tags, decode entities, collapse whitespace.
pub fn plain_text(html: &str) -> String {
    let stripped = strip_html_tags(html);
    let decoded = html_escape::decode_html_entities(&stripped);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove `<...>` tags. A `<` with no closing `>` (or `<>`) is kept as text.
fn strip_html_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('>') {
            Some(end) if end > 0 => rest = &after[end + 1..],
            _ => {
                result.push('<');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

fn truncate_at_word(text: &str, max_length: usize) -> String {
    let mut truncated: String = text
        .chars()
        .take(max_length.saturating_sub(ELLIPSIS.len()))
        .collect();
    if let Some(space) = truncated.rfind(' ') {
        let space_index = char_len(&truncated[..space]);
        if space_index as f64 > max_length as f64 * WORD_BOUNDARY_RATIO {
            truncated.truncate(space);
        }
    }
    truncated.push_str(ELLIPSIS);
    truncated
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

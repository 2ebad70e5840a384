//! Centralized name handling for slugs and navigation labels.
//!
//! Two transforms live here because both turn human-authored text into
//! something the site presents:
//!
//! ## Slugs
//!
//! Front matter slugs are author-typed and may contain capitals or spaces.
//! [`normalize_slug`] produces the canonical form used for both the output
//! path and the public URL:
//! - `"About Me"` → `"about_me"`
//! - `"Contact/"` → `"contact/"`
//! - `"  Index "` → `"index"`
//!
//! ## Display Names
//!
//! Navigation labels are derived from page titles at markup time.
//! Underscores become spaces and every word is title-cased:
//! - `"getting_started"` → `"Getting Started"`
//! - `"FAQ"` → `"Faq"`
//! - `"hello world"` → `"Hello World"`

/// Normalize an author-supplied slug: trim, lower-case, spaces → underscores.
///
/// Idempotent: normalizing an already-normalized slug returns it unchanged.
pub fn normalize_slug(slug: &str) -> String {
    slug.trim().to_lowercase().replace(' ', "_")
}

/// Navigation label for a page title.
///
/// A word starts after any non-alphabetic character, so `"it's"` becomes
/// `"It'S"` and `"v2beta"` becomes `"V2Beta"`.
pub fn display_name(title: &str) -> String {
    let spaced = title.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

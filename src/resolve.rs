//! Output path and URL resolution.
//!
//! Every published document gets an output file and a public URL, decided
//! together from its front matter `slug` and its location in the content
//! tree. The rules are evaluated in order:
//!
//! | Slug (normalized)    | Source                  | Output file                      | URL            |
//! |----------------------|-------------------------|----------------------------------|----------------|
//! | ends with `/`        | any                     | `out/<slug>index.html`           | `/<slug>`      |
//! | `index`              | any                     | `out/index.html`                 | `/`            |
//! | anything else        | `content/page.md`       | `out/<slug>/index.html`          | `/<slug>`      |
//! | anything else        | `content/dir/page.md`   | `out/dir/<slug>/index.html`      | `/dir/<slug>`  |
//! | absent               | any                     | not published                    | -              |
//!
//! Every output is an `index.html`, so each URL resolves to its file on any
//! static host that serves directory indexes.
//!
//! ## Guard rails
//!
//! - Leading `/` characters are stripped so a slug cannot turn into an
//!   absolute filesystem path.
//! - A slug that is empty after normalization counts as absent.
//! - A slug with a `..` segment is rejected.
//!
//! Collisions (two documents, one output file) are not detected here; see
//! [`crate::scan`].

use crate::metadata::Metadata;
use crate::naming::normalize_slug;
use std::path::{Path, PathBuf};
use thiserror::Error;

const INDEX_FILE: &str = "index.html";
const INDEX_SLUG: &str = "index";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("slug '{0}' escapes the output directory")]
    EscapesOutputRoot(String),
}

/// Where a page is written and the URL it is served at.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub output_path: PathBuf,
    pub url_path: String,
}

/// Resolve a document's output location.
///
/// `relative_source` is the document path relative to the content root.
/// Returns `Ok(None)` when the document has no usable slug and is therefore
/// not published.
pub fn resolve(
    relative_source: &Path,
    metadata: &Metadata,
    output_root: &Path,
) -> Result<Option<Location>, ResolveError> {
    let Some(raw) = metadata.slug() else {
        return Ok(None);
    };
    let normalized = normalize_slug(&raw);
    let slug = normalized.trim_start_matches('/');
    if slug.is_empty() {
        return Ok(None);
    }
    if slug.split('/').any(|segment| segment == "..") {
        return Err(ResolveError::EscapesOutputRoot(raw));
    }

    let location = if slug.ends_with('/') {
        Location {
            output_path: output_root.join(slug).join(INDEX_FILE),
            url_path: format!("/{slug}"),
        }
    } else if slug == INDEX_SLUG {
        Location {
            output_path: output_root.join(INDEX_FILE),
            url_path: "/".to_string(),
        }
    } else {
        match parent_segments(relative_source) {
            None => Location {
                output_path: output_root.join(slug).join(INDEX_FILE),
                url_path: format!("/{slug}"),
            },
            Some((dir, segments)) => Location {
                output_path: output_root.join(dir).join(slug).join(INDEX_FILE),
                url_path: format!("/{}/{slug}", segments.join("/")),
            },
        }
    };
    Ok(Some(location))
}

/// Parent directory of a content-relative path and its URL segments.
///
/// `None` for top-level documents.
fn parent_segments(relative_source: &Path) -> Option<(&Path, Vec<String>)> {
    let dir = relative_source.parent()?;
    let segments: Vec<String> = dir
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();
    if segments.is_empty() {
        None
    } else {
        Some((dir, segments))
    }
}

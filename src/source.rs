//! Markdown document discovery.
//!
//! Walks the content root recursively and returns every `*.md` file in
//! directory-traversal order. The order is whatever the filesystem yields;
//! nothing downstream depends on it except which of two colliding pages is
//! written last.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// File extension treated as a markdown document.
pub const MARKDOWN_EXTENSION: &str = "md";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Content directory does not exist: {0}")]
    ContentRootMissing(PathBuf),
    #[error("Failed to walk content directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Enumerate markdown files under `content_root`.
///
/// Returns `ContentRootMissing` if the root does not exist. A root with no
/// markdown files yields an empty list.
pub fn discover(content_root: &Path) -> Result<Vec<PathBuf>, SourceError> {
    if !content_root.is_dir() {
        return Err(SourceError::ContentRootMissing(content_root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(content_root).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|e| e == MARKDOWN_EXTENSION)
        .unwrap_or(false)
}

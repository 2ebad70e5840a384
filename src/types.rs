//! Shared types passed between build stages.
//!
//! [`ResolvedPage`] is produced once per published document in Pass 1 and
//! read (never mutated) by navigation synthesis and Pass 2.

use crate::metadata::Metadata;
use std::path::PathBuf;

/// A document whose output location and URL have been decided.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPage {
    pub title: String,
    /// Public, slash-rooted URL (e.g. `/blog/hello`, `/contact/`, `/`).
    pub url_path: String,
    /// File the page is written to; always an `index.html`.
    pub output_path: PathBuf,
    pub body_html: String,
    pub metadata: Metadata,
    /// Bounded-length meta description.
    pub description: String,
    /// Source path relative to the content root.
    pub source: PathBuf,
}

/// Two documents that resolved to the same output file.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    pub output_path: PathBuf,
    /// Source written first (and overwritten).
    pub first: PathBuf,
    /// Source written last (wins).
    pub second: PathBuf,
}

/// Outcome of a build.
///
/// `succeeded` and `errors` are the reported counts. `succeeded` counts page
/// writes, so colliding pages count once each even though only the last one
/// survives on disk. `skipped` and `collisions` are informational and never
/// change the counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildResult {
    pub succeeded: usize,
    pub errors: usize,
    /// Documents dropped for lacking a slug.
    pub skipped: Vec<PathBuf>,
    pub collisions: Vec<Collision>,
}

impl BuildResult {
    /// Result of a build that aborted before producing pages.
    pub fn failed() -> Self {
        Self {
            errors: 1,
            ..Self::default()
        }
    }

    /// `(success_count, error_count)`.
    pub fn counts(&self) -> (usize, usize) {
        (self.succeeded, self.errors)
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

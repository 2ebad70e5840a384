//! Pass 1: document parsing and resolution.
//!
//! Each discovered markdown file is read, split into front matter and body,
//! rendered to HTML, resolved to an output location, and given a meta
//! description. The result is one [`ResolvedPage`] per published document.
//!
//! ## Per-document outcomes
//!
//! | Outcome                       | Page | Counted as error |
//! |-------------------------------|------|------------------|
//! | Resolved                      | yes  | no               |
//! | No `slug` in front matter     | no   | no (logged)      |
//! | Read failure                  | no   | yes              |
//! | Slug rejected by the resolver | no   | yes              |
//!
//! Failures never stop the pass; the next document is processed.
//!
//! ## Collisions
//!
//! Output paths are tracked as pages resolve. When a second document lands
//! on an output file already claimed, a warning names both sources and the
//! collision is recorded. Both pages stay in the set, so the later one
//! overwrites the earlier at write time.

use crate::config::SiteConfig;
use crate::description::extract_description;
use crate::render::render_document;
use crate::resolve::{self, ResolveError};
use crate::types::{Collision, ResolvedPage};
use log::{Level, debug, error, info, log, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0} is not inside the content directory")]
    OutsideContentRoot(PathBuf),
    #[error("Cannot resolve output path: {0}")]
    Resolve(#[from] ResolveError),
}

/// Everything Pass 1 produces.
#[derive(Debug, Default)]
pub struct ScanOutput {
    pub pages: Vec<ResolvedPage>,
    pub errors: usize,
    pub skipped: Vec<PathBuf>,
    pub collisions: Vec<Collision>,
}

/// Parse and resolve a single document.
///
/// Returns `Ok(None)` when the document has no slug and is not published.
pub fn scan_document(
    path: &Path,
    config: &SiteConfig,
) -> Result<Option<ResolvedPage>, DocumentError> {
    let relative = path
        .strip_prefix(&config.content_root)
        .map_err(|_| DocumentError::OutsideContentRoot(path.to_path_buf()))?;

    let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} characters from {}", text.chars().count(), path.display());

    let doc = render_document(path, &text);
    debug!("Page title: {}", doc.title);

    let Some(location) = resolve::resolve(relative, &doc.metadata, &config.output_root)? else {
        return Ok(None);
    };
    debug!(
        "{} -> {} ({})",
        relative.display(),
        location.url_path,
        location.output_path.display()
    );

    let description =
        extract_description(&doc.metadata, &doc.html, config.description_max_length);

    Ok(Some(ResolvedPage {
        title: doc.title,
        url_path: location.url_path,
        output_path: location.output_path,
        body_html: doc.html,
        metadata: doc.metadata,
        description,
        source: relative.to_path_buf(),
    }))
}

/// Run Pass 1 over every discovered file, in order.
pub fn scan(files: &[PathBuf], config: &SiteConfig) -> ScanOutput {
    let mut output = ScanOutput::default();
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();
    let skip_level = if config.warn_missing_slug {
        Level::Warn
    } else {
        Level::Debug
    };

    for path in files {
        info!("Processing: {}", path.display());
        match scan_document(path, config) {
            Ok(Some(page)) => {
                if let Some(first) = claimed.insert(page.output_path.clone(), page.source.clone())
                {
                    warn!(
                        "{} and {} both resolve to {}; the later one overwrites",
                        first.display(),
                        page.source.display(),
                        page.output_path.display()
                    );
                    output.collisions.push(Collision {
                        output_path: page.output_path.clone(),
                        first,
                        second: page.source.clone(),
                    });
                }
                output.pages.push(page);
            }
            Ok(None) => {
                log!(
                    skip_level,
                    "Skipping {}: no slug in front matter",
                    path.display()
                );
                output.skipped.push(path.clone());
            }
            Err(e) => {
                error!("Failed to process {}: {}", path.display(), e);
                output.errors += 1;
            }
        }
    }

    info!(
        "Resolved {} pages ({} skipped, {} errors)",
        output.pages.len(),
        output.skipped.len(),
        output.errors
    );
    output
}

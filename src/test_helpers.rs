//! Shared test utilities for the mdsite test suite.
//!
//! [`TestSite`] lays out a throwaway project in a temp directory: a content
//! root, an output root, and a template directory with a minimal template.
//! Documents are written with [`TestSite::write_doc`] (front matter + body)
//! or [`TestSite::write_raw`].
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = TestSite::new();
//! site.write_doc("blog/post.md", "slug: hello", "Body");
//! let result = site.build();
//! assert_eq!(result.counts(), (1, 0));
//! assert!(site.read_output("blog/hello/index.html").contains("Body"));
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::metadata::Metadata;
use crate::site;
use crate::types::{BuildResult, ResolvedPage};

// =========================================================================
// Fixture setup
// =========================================================================

/// Template used by [`TestSite`]: every token, each on its own line.
pub const TEST_TEMPLATE: &str = "<title>{title}</title>\n\
<meta name=\"description\" content=\"{description}\">\n\
{navigation}\n\
<main>{content}</main>\n";

/// A temp project: `content/`, `dist/`, `templates/base.html`.
pub struct TestSite {
    tmp: TempDir,
    pub config: SiteConfig,
}

impl TestSite {
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let config = SiteConfig {
            content_root: tmp.path().join("content"),
            output_root: tmp.path().join("dist"),
            template: tmp.path().join("templates/base.html"),
            ..SiteConfig::default()
        };
        fs::create_dir_all(&config.content_root).unwrap();
        fs::create_dir_all(config.template_dir()).unwrap();
        fs::write(&config.template, TEST_TEMPLATE).unwrap();
        Self { tmp, config }
    }

    /// The temp directory holding the whole project.
    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    /// Write a document with a front matter block. Returns its full path.
    pub fn write_doc(&self, rel: &str, front_matter: &str, body: &str) -> PathBuf {
        self.write_raw(rel, &format!("---\n{front_matter}\n---\n{body}"))
    }

    /// Write a document verbatim. Returns its full path.
    pub fn write_raw(&self, rel: &str, text: &str) -> PathBuf {
        let path = self.config.content_root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, text).unwrap();
        path
    }

    /// Write a file next to the template (static assets).
    pub fn write_asset(&self, name: &str, contents: &str) {
        fs::write(self.config.template_dir().join(name), contents).unwrap();
    }

    pub fn build(&self) -> BuildResult {
        site::build_site(&self.config)
    }

    /// Read a generated file. Panics with the list of outputs on a miss.
    pub fn read_output(&self, rel: &str) -> String {
        let path = self.config.output_root.join(rel);
        fs::read_to_string(&path).unwrap_or_else(|_| {
            panic!(
                "output '{rel}' not found. Available: {:?}",
                self.output_files()
            )
        })
    }

    /// All files under the output root, relative and sorted.
    pub fn output_files(&self) -> Vec<String> {
        let mut files: Vec<String> = walkdir::WalkDir::new(&self.config.output_root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                e.path()
                    .strip_prefix(&self.config.output_root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        files.sort();
        files
    }
}

// =========================================================================
// Page builders
// =========================================================================

/// A resolved page with only a title and URL filled in.
pub fn page(title: &str, url_path: &str) -> ResolvedPage {
    ResolvedPage {
        title: title.to_string(),
        url_path: url_path.to_string(),
        output_path: PathBuf::from("dist").join(url_path.trim_matches('/')).join("index.html"),
        body_html: format!("<p>{title}</p>"),
        metadata: Metadata::default(),
        description: String::new(),
        source: PathBuf::from(format!("{title}.md")),
    }
}

//! Build orchestration.
//!
//! [`build_site`] drives one full build through these stages:
//!
//! ```text
//! Init ──► AssetsReady ──► Discovering ──► Pass1 ──► NavigationBuilt ──► Pass2 ──► Done
//!   │
//!   └──► Failed   (output root not preparable, template not loadable)
//! ```
//!
//! Fatal conditions return `(0, 1)` without touching any document: the output
//! root cannot be prepared, the template cannot be loaded, or the content
//! root is missing. Cleaning is refused (and fatal) when the output root is,
//! or contains, the content root or the template directory. Everything after discovery is per-document and only
//! moves the counters.
//!
//! [`check_site`] runs discovery and Pass 1 alone and writes nothing.

use crate::assets::{copy_static_assets, write_manifest};
use crate::config::SiteConfig;
use crate::generate::generate;
use crate::navigation::NavigationModel;
use crate::scan::{ScanOutput, scan};
use crate::source::{SourceError, discover};
use crate::template::load_template;
use crate::types::BuildResult;
use log::{debug, error, info, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputRootError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("refusing to clean {output}: it contains {protected}")]
    ContainsSources { output: PathBuf, protected: PathBuf },
}

/// Build lifecycle stage, logged on each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    Init,
    AssetsReady,
    Discovering,
    Pass1,
    NavigationBuilt,
    Pass2,
    Done,
    Failed,
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildStage::Init => "init",
            BuildStage::AssetsReady => "assets-ready",
            BuildStage::Discovering => "discovering",
            BuildStage::Pass1 => "pass-1",
            BuildStage::NavigationBuilt => "navigation-built",
            BuildStage::Pass2 => "pass-2",
            BuildStage::Done => "done",
            BuildStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

fn enter(stage: BuildStage) {
    debug!("Build stage: {stage}");
}

/// Remove (when `clean`) and recreate the output root.
///
/// None of the `protected` directories may be the output root or lie inside
/// it when cleaning. Paths are compared after canonicalization; protected
/// paths that do not exist are ignored.
pub fn prepare_output_root(
    output_root: &Path,
    clean: bool,
    protected: &[&Path],
) -> Result<(), OutputRootError> {
    if clean && output_root.exists() {
        let output = fs::canonicalize(output_root)?;
        for &path in protected {
            let path = if path.as_os_str().is_empty() {
                Path::new(".")
            } else {
                path
            };
            if let Ok(source) = fs::canonicalize(path)
                && source.starts_with(&output)
            {
                return Err(OutputRootError::ContainsSources {
                    output,
                    protected: source,
                });
            }
        }
        debug!("Removing existing output {}", output_root.display());
        fs::remove_dir_all(output_root)?;
    }
    fs::create_dir_all(output_root)?;
    Ok(())
}

/// Run a full build. Never panics on bad input; failures are counted.
pub fn build_site(config: &SiteConfig) -> BuildResult {
    let started = Instant::now();
    enter(BuildStage::Init);
    info!("Building site from {}", config.content_root.display());

    let protected = [config.content_root.as_path(), config.template_dir()];
    if let Err(e) = prepare_output_root(&config.output_root, config.clean_output, &protected) {
        error!(
            "Cannot prepare output directory {}: {}",
            config.output_root.display(),
            e
        );
        enter(BuildStage::Failed);
        return BuildResult::failed();
    }

    let template = match load_template(&config.template) {
        Ok(template) => template,
        Err(e) => {
            error!("{e}");
            enter(BuildStage::Failed);
            return BuildResult::failed();
        }
    };
    let missing = template.missing_tokens();
    if !missing.is_empty() {
        warn!(
            "Template {} does not contain {}",
            config.template.display(),
            missing.join(", ")
        );
    }

    match copy_static_assets(config.template_dir(), &config.output_root) {
        Ok(copied) => debug!("Copied {copied} static assets"),
        Err(e) => error!("Failed to copy static assets: {e}"),
    }
    if let Err(e) = write_manifest(&config.site, &config.output_root) {
        error!("Failed to write manifest: {e}");
    }
    enter(BuildStage::AssetsReady);

    enter(BuildStage::Discovering);
    let files = match discover(&config.content_root) {
        Ok(files) => files,
        Err(e) => {
            error!("{e}");
            enter(BuildStage::Failed);
            return BuildResult::failed();
        }
    };
    if files.is_empty() {
        warn!("No markdown files found in {}", config.content_root.display());
        enter(BuildStage::Done);
        return BuildResult::default();
    }
    info!("Found {} markdown files", files.len());

    enter(BuildStage::Pass1);
    let scanned = scan(&files, config);

    let model = NavigationModel::build(&scanned.pages);
    enter(BuildStage::NavigationBuilt);
    debug!("Navigation has {} entries", model.entries().len());

    enter(BuildStage::Pass2);
    let generated = generate(&scanned.pages, &model, &template, &config.site.name);

    let result = BuildResult {
        succeeded: generated.written,
        errors: scanned.errors + generated.errors,
        skipped: scanned.skipped,
        collisions: scanned.collisions,
    };
    enter(BuildStage::Done);
    info!(
        "Build complete in {:.2?}: {} succeeded, {} errors. Output in {}",
        started.elapsed(),
        result.succeeded,
        result.errors,
        config.output_root.display()
    );
    result
}

/// Discovery and Pass 1 only. Nothing is written.
pub fn check_site(config: &SiteConfig) -> Result<ScanOutput, SourceError> {
    let files = discover(&config.content_root)?;
    info!("Found {} markdown files", files.len());
    Ok(scan(&files, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn stage_names() {
        assert_eq!(BuildStage::NavigationBuilt.to_string(), "navigation-built");
        assert_eq!(BuildStage::Pass1.to_string(), "pass-1");
    }

    #[test]
    fn prepare_cleans_existing_output() {
        let site = TestSite::new();
        let out = &site.config.output_root;
        fs::create_dir_all(out.join("old")).unwrap();
        fs::write(out.join("old/stale.html"), "x").unwrap();

        prepare_output_root(out, true, &[]).unwrap();

        assert!(out.is_dir());
        assert!(!out.join("old").exists());
    }

    #[test]
    fn prepare_keeps_existing_output_when_not_cleaning() {
        let site = TestSite::new();
        let out = &site.config.output_root;
        fs::create_dir_all(out).unwrap();
        fs::write(out.join("keep.txt"), "x").unwrap();

        prepare_output_root(out, false, &[]).unwrap();

        assert!(out.join("keep.txt").exists());
    }

    #[test]
    fn prepare_fails_when_output_is_a_file() {
        let site = TestSite::new();
        let out = site.root().join("file");
        fs::write(&out, "x").unwrap();
        assert!(prepare_output_root(&out, false, &[]).is_err());
    }

    #[test]
    fn prepare_refuses_to_clean_over_sources() {
        let site = TestSite::new();
        let doc = site.write_doc("a.md", "slug: a", "A");
        let content = site.config.content_root.as_path();

        for output in [site.root(), content] {
            let result = prepare_output_root(output, true, &[content]);
            assert!(
                matches!(result, Err(OutputRootError::ContainsSources { .. })),
                "{}",
                output.display()
            );
        }
        assert!(doc.exists());
    }

    #[test]
    fn prepare_allows_output_beside_sources() {
        let site = TestSite::new();
        let out = &site.config.output_root;
        fs::create_dir_all(out).unwrap();
        fs::write(out.join("stale.html"), "x").unwrap();

        let protected = [site.config.content_root.as_path(), site.config.template_dir()];
        prepare_output_root(out, true, &protected).unwrap();

        assert!(!out.join("stale.html").exists());
    }

    #[test]
    fn build_over_sources_is_fatal_and_keeps_them() {
        let mut site = TestSite::new();
        let doc = site.write_doc("a.md", "slug: a", "A");
        site.config.output_root = site.root().to_path_buf();

        assert_eq!(site.build().counts(), (0, 1));
        assert!(doc.exists());
        assert!(site.config.template.exists());
    }

    #[test]
    fn build_counts_successes_and_errors() {
        let site = TestSite::new();
        site.write_doc("a.md", "slug: a", "A");
        site.write_doc("b.md", "slug: ../../b", "B");
        site.write_doc("c.md", "title: C", "C");

        let result = site.build();

        assert_eq!(result.counts(), (1, 1));
        assert_eq!(result.skipped.len(), 1);
    }

    #[test]
    fn build_writes_pages_assets_and_manifest() {
        let site = TestSite::new();
        site.write_asset("style.css", "main {}");
        site.write_doc("about.md", "slug: index\ntitle: About", "Hi.");
        site.write_doc("blog/post.md", "slug: hello", "Post.");

        assert_eq!(site.build().counts(), (2, 0));
        assert_eq!(
            site.output_files(),
            vec![
                "blog/hello/index.html",
                "index.html",
                "manifest.json",
                "style.css"
            ]
        );
        assert!(site.read_output("index.html").contains("<title>About</title>"));
    }

    #[test]
    fn unpreparable_output_is_fatal() {
        let mut site = TestSite::new();
        site.write_doc("a.md", "slug: a", "A");
        let blocker = site.root().join("blocker");
        fs::write(&blocker, "x").unwrap();
        site.config.output_root = blocker.join("dist");

        assert_eq!(site.build().counts(), (0, 1));
    }

    #[test]
    fn check_writes_nothing() {
        let site = TestSite::new();
        site.write_doc("a.md", "slug: a", "A");

        let scanned = check_site(&site.config).unwrap();

        assert_eq!(scanned.pages.len(), 1);
        assert!(!site.config.output_root.exists());
    }

    #[test]
    fn check_reports_missing_content_root() {
        let mut site = TestSite::new();
        site.config.content_root = site.root().join("nope");
        assert!(matches!(
            check_site(&site.config),
            Err(SourceError::ContentRootMissing(_))
        ));
    }
}

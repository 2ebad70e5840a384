//! CLI output formatting.
//!
//! Everything here is a pure `format_*` function returning lines, with thin
//! `print_*` wrappers used by `main`. Pages are shown by URL first, with the
//! source and output file as indented context:
//!
//! ## Check
//!
//! ```text
//! Pages
//! /blog/hello → blog/hello/index.html
//!     Source: blog/post.md
//! /contact/ → contact/index.html
//!     Source: page.md
//!
//! Skipped (no slug)
//!     drafts/idea.md
//!
//! Collisions
//!     index.html ← about.md, home.md
//!
//! 2 pages, 1 skipped, 0 errors
//! ```
//!
//! ## Build
//!
//! ```text
//! 2 pages written, 0 errors → dist
//! ```

use crate::scan::ScanOutput;
use crate::types::{BuildResult, Collision};
use std::path::Path;

const INDENT: &str = "    ";

/// Path relative to `root` with forward slashes; unchanged if not under it.
fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn collision_lines(collisions: &[Collision], output_root: &Path) -> Vec<String> {
    collisions
        .iter()
        .map(|c| {
            format!(
                "{INDENT}{} ← {}, {}",
                relative_display(&c.output_path, output_root),
                c.first.display(),
                c.second.display()
            )
        })
        .collect()
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Lines printed by `mdsite check`.
pub fn format_check_output(
    scanned: &ScanOutput,
    content_root: &Path,
    output_root: &Path,
) -> Vec<String> {
    let mut lines = Vec::new();

    if !scanned.pages.is_empty() {
        lines.push("Pages".to_string());
        for page in &scanned.pages {
            lines.push(format!(
                "{} → {}",
                page.url_path,
                relative_display(&page.output_path, output_root)
            ));
            lines.push(format!("{INDENT}Source: {}", page.source.display()));
        }
    }

    if !scanned.skipped.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("Skipped (no slug)".to_string());
        for path in &scanned.skipped {
            lines.push(format!("{INDENT}{}", relative_display(path, content_root)));
        }
    }

    if !scanned.collisions.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("Collisions".to_string());
        lines.extend(collision_lines(&scanned.collisions, output_root));
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "{}, {} skipped, {}",
        plural(scanned.pages.len(), "page"),
        scanned.skipped.len(),
        plural(scanned.errors, "error")
    ));
    lines
}

/// Lines printed after `mdsite build`.
pub fn format_build_summary(result: &BuildResult, output_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    if !result.collisions.is_empty() {
        lines.push("Collisions (last write wins)".to_string());
        lines.extend(collision_lines(&result.collisions, output_root));
    }
    lines.push(format!(
        "{} written, {} → {}",
        plural(result.succeeded, "page"),
        plural(result.errors, "error"),
        output_root.display()
    ));
    lines
}

pub fn print_check_output(scanned: &ScanOutput, content_root: &Path, output_root: &Path) {
    for line in format_check_output(scanned, content_root, output_root) {
        println!("{line}");
    }
}

pub fn print_build_summary(result: &BuildResult, output_root: &Path) {
    for line in format_build_summary(result, output_root) {
        println!("{line}");
    }
}

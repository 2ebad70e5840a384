//! Pass 2: page emission.
//!
//! Runs after every page is resolved and the [`NavigationModel`] is built,
//! so each page's navigation can mark the current entry. For every page:
//!
//! ```text
//! ResolvedPage ──► render_navigation(model, url) ──┐
//!            │                                     ├─► Template::render ─► output_path
//!            └──► title, body_html, description ───┘
//! ```
//!
//! Parent directories are created as needed. Pages are written in Pass 1
//! order, so when two pages share an output path the later one wins.
//! A write failure is counted and the remaining pages are still emitted.

use crate::navigation::{NavigationModel, render_navigation};
use crate::template::{PageValues, Template};
use crate::types::ResolvedPage;
use log::{debug, error, info};
use std::fs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Counts reported by Pass 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOutput {
    pub written: usize,
    pub errors: usize,
}

/// Render one page to its final HTML text.
pub fn render_page(
    template: &Template,
    page: &ResolvedPage,
    model: &NavigationModel,
    site_name: &str,
) -> String {
    let navigation = render_navigation(model, &page.url_path, site_name).into_string();
    template.render(&PageValues {
        title: &page.title,
        content: &page.body_html,
        navigation: &navigation,
        description: &page.description,
    })
}

/// Render and write one page.
pub fn emit_page(
    template: &Template,
    page: &ResolvedPage,
    model: &NavigationModel,
    site_name: &str,
) -> Result<(), GenerateError> {
    let html = render_page(template, page, model, site_name);
    if let Some(parent) = page.output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&page.output_path, html)?;
    Ok(())
}

/// Run Pass 2 over all resolved pages.
pub fn generate(
    pages: &[ResolvedPage],
    model: &NavigationModel,
    template: &Template,
    site_name: &str,
) -> GenerateOutput {
    let mut output = GenerateOutput::default();
    for page in pages {
        match emit_page(template, page, model, site_name) {
            Ok(()) => {
                debug!("Wrote {} ({})", page.output_path.display(), page.url_path);
                info!("Generated: {}", page.url_path);
                output.written += 1;
            }
            Err(e) => {
                error!(
                    "Failed to write {} for {}: {}",
                    page.output_path.display(),
                    page.source.display(),
                    e
                );
                output.errors += 1;
            }
        }
    }
    output
}

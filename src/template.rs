//! Page template loading and placeholder substitution.
//!
//! A template is plain text with four literal tokens:
//!
//! | Token           | Replaced with                          |
//! |-----------------|----------------------------------------|
//! | `{title}`       | page title                             |
//! | `{content}`     | rendered markdown body                 |
//! | `{navigation}`  | site navigation markup for the page    |
//! | `{description}` | meta description                       |
//!
//! Substitution is plain substring replacement in the order above, so a
//! later token that appears inside an earlier value (for example
//! `{description}` written in a page body) is replaced as well. Values are
//! inserted unescaped.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TITLE_TOKEN: &str = "{title}";
pub const CONTENT_TOKEN: &str = "{content}";
pub const NAVIGATION_TOKEN: &str = "{navigation}";
pub const DESCRIPTION_TOKEN: &str = "{description}";

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Values substituted into the template for one page.
#[derive(Debug, Clone, Copy)]
pub struct PageValues<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub navigation: &'a str,
    pub description: &'a str,
}

/// A loaded page template.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Substitute page values into the template.
    pub fn render(&self, values: &PageValues<'_>) -> String {
        self.text
            .replace(TITLE_TOKEN, values.title)
            .replace(CONTENT_TOKEN, values.content)
            .replace(NAVIGATION_TOKEN, values.navigation)
            .replace(DESCRIPTION_TOKEN, values.description)
    }

    /// Tokens the template does not contain.
    pub fn missing_tokens(&self) -> Vec<&'static str> {
        [TITLE_TOKEN, CONTENT_TOKEN, NAVIGATION_TOKEN, DESCRIPTION_TOKEN]
            .into_iter()
            .filter(|token| !self.text.contains(token))
            .collect()
    }
}

/// Load the page template from disk.
pub fn load_template(path: &Path) -> Result<Template, TemplateError> {
    info!("Loading template from {}", path.display());
    if !path.is_file() {
        return Err(TemplateError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| TemplateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded template ({} characters)", text.chars().count());
    Ok(Template::new(text))
}

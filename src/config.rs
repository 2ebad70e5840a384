//! Site configuration module.
//!
//! Handles loading and validating the `mdsite.toml` build configuration.
//! Every key is optional and falls back to its stock default; command-line
//! overrides are applied on top by the caller.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_root = "content"          # Markdown source tree
//! output_root = "dist"              # Generated site
//! template = "templates/base.html"  # Page template; assets live beside it
//! description_max_length = 160      # Meta description bound (>= 4)
//! clean_output = true               # Remove output_root before building
//! strict = false                    # Fail the process when any page errors
//! warn_missing_slug = true          # Log slug-less documents as warnings
//! # log_file = "mdsite.log"         # Also append log output to this file
//!
//! [site]
//! name = "Static Site"              # Nav logo text and manifest name
//! description = "A static site generated from markdown"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up relative to the working directory.
pub const CONFIG_FILE_NAME: &str = "mdsite.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Build configuration.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory scanned recursively for `*.md` documents.
    pub content_root: PathBuf,
    /// Directory the generated site is written to.
    pub output_root: PathBuf,
    /// Page template. Static assets are copied from its parent directory.
    pub template: PathBuf,
    /// Upper bound (in characters) for generated meta descriptions.
    pub description_max_length: usize,
    /// Remove an existing output root before building.
    pub clean_output: bool,
    /// Treat any per-document error as a failed build.
    pub strict: bool,
    /// Log documents without a `slug` at warning level (debug otherwise).
    pub warn_missing_slug: bool,
    /// Append log output to this file as well as the console.
    pub log_file: Option<PathBuf>,
    /// Site identity used in navigation and the web manifest.
    pub site: SiteInfo,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("content"),
            output_root: PathBuf::from("dist"),
            template: PathBuf::from("templates/base.html"),
            description_max_length: 160,
            clean_output: true,
            strict: false,
            warn_missing_slug: true,
            log_file: None,
            site: SiteInfo::default(),
        }
    }
}

/// Site identity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Display name: navigation logo text and manifest `name`.
    pub name: String,
    /// Manifest `description`.
    pub description: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Static Site".to_string(),
            description: "A static site generated from markdown".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // "..." plus at least one character of text
        if self.description_max_length < 4 {
            return Err(ConfigError::Validation(
                "description_max_length must be at least 4".into(),
            ));
        }
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        for (key, path) in [
            ("content_root", &self.content_root),
            ("output_root", &self.output_root),
            ("template", &self.template),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }

    /// Directory holding the template and its static assets.
    pub fn template_dir(&self) -> &Path {
        self.template.parent().unwrap_or_else(|| Path::new(""))
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Load `mdsite.toml`, or stock defaults when the file is absent.
///
/// Keys missing from the file keep their defaults, including keys inside
/// `[site]`. The result is validated before it is returned.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let config = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `mdsite.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# mdsite Configuration
# ====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
# Command-line options (--source, --output, --template, --strict) override
# the values in this file.

# Directory scanned recursively for *.md documents.
content_root = "content"

# Directory the generated site is written to.
output_root = "dist"

# Page template. Must contain the literal tokens {title}, {content},
# {navigation} and {description}. style.css and favicon files are copied
# from the same directory.
template = "templates/base.html"

# Upper bound (in characters) for generated <meta name="description"> text.
description_max_length = 160

# Remove the output directory before every build.
clean_output = true

# Exit with a failure status when any document fails to build.
strict = false

# Documents without a `slug` in their front matter are not published.
# Report them at warning level (true) or only in debug output (false).
warn_missing_slug = true

# Append log output to this file as well as the console. The file is
# created if needed. Not set by default (console only).
# log_file = "mdsite.log"

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
# Shown as the navigation logo and used as the web manifest name.
name = "Static Site"

# Web manifest description.
description = "A static site generated from markdown"
"##
}

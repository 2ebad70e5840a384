//! # mdsite
//!
//! A static site generator for markdown documents. Each document carries a
//! YAML front matter block; its `slug` decides where the page is published.
//! All pages share one HTML template and a site-wide navigation bar.
//!
//! # Architecture: Two Passes
//!
//! Navigation on every page lists every page, so nothing can be written until
//! every document has been resolved:
//!
//! ```text
//! 1. Pass 1     content/*.md  →  Vec<ResolvedPage>   (parse, render, resolve, describe)
//!    Navigation Vec<ResolvedPage> → NavigationModel  (sorted by title)
//! 2. Pass 2     pages + model + template → dist/**/index.html
//! ```
//!
//! Pass 1 never writes. Pass 2 never reads documents. The split also makes
//! `mdsite check` a matter of running Pass 1 alone.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Build orchestrator: stages, fatal errors, final counts |
//! | [`source`] | Recursive `*.md` discovery under the content root |
//! | [`metadata`] | Front matter splitting and YAML metadata access |
//! | [`render`] | Markdown body to HTML (pulldown-cmark) and page title |
//! | [`resolve`] | Slug to output file and public URL |
//! | [`description`] | Bounded-length meta description extraction |
//! | [`scan`] | Pass 1 over all documents, with collision tracking |
//! | [`navigation`] | Navigation model and per-page markup (maud) |
//! | [`template`] | Template loading and `{token}` substitution |
//! | [`generate`] | Pass 2: render and write every page |
//! | [`assets`] | Static asset copying and `manifest.json` |
//! | [`config`] | `mdsite.toml` loading with stock defaults, validation |
//! | [`naming`] | Slug normalization and navigation display names |
//! | [`types`] | Shared types (`ResolvedPage`, `BuildResult`) |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | env_logger setup with optional log file |
//!
//! # Design Decisions
//!
//! ## Slugs Are Opt-In Publication
//!
//! A document without a `slug` is not published. This lets drafts and notes
//! live next to published pages in the same tree. Skips are logged but never
//! counted as errors.
//!
//! ## Errors Are Counted, Not Propagated
//!
//! A broken document should not take the site down. Per-document failures are
//! logged and counted; [`site::build_site`] returns `(succeeded, errors)` via
//! [`types::BuildResult`]. Only conditions that make every page impossible
//! (no template, no output directory, no content directory) abort the build.
//!
//! ## Plain Token Templates
//!
//! The page template is ordinary HTML with four literal tokens. There is no
//! template language to learn, and any HTML file can be turned into a
//! template by adding the tokens.

pub mod assets;
pub mod config;
pub mod description;
pub mod generate;
pub mod logging;
pub mod metadata;
pub mod naming;
pub mod navigation;
pub mod output;
pub mod render;
pub mod resolve;
pub mod scan;
pub mod site;
pub mod source;
pub mod template;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

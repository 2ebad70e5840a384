//! Page metadata: front matter splitting and field lookup.
//!
//! A document may open with a YAML block fenced by lines of exactly `---`:
//!
//! ```text
//! ---
//! title: Hello World
//! slug: hello
//! description: A short greeting.
//! ---
//! # Hello
//!
//! Body text...
//! ```
//!
//! ## Recognized keys
//!
//! - `title`: page title. Falls back to the file stem when absent.
//! - `slug`: controls the output location and URL. Documents without one are
//!   not published.
//! - `description`: meta description, used verbatim when short enough.
//!
//! Any other keys are kept in the map but ignored by the build.
//!
//! ## Degradation
//!
//! Front matter never fails a document. A missing block, an unterminated
//! block, YAML that does not parse, or YAML that is not a mapping all yield
//! empty metadata. Unterminated blocks keep the full text as the body; the
//! other cases keep whatever follows the closing fence.

use log::{debug, warn};
use serde_yaml::Value;
use std::collections::BTreeMap;
use thiserror::Error;

const FENCE: &str = "---";

/// Key/value metadata parsed from a document's front matter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    fields: BTreeMap<String, Value>,
}

impl Metadata {
    /// Parse a YAML front matter block.
    ///
    /// An empty block (YAML null) yields empty metadata. Any other
    /// non-mapping document is reported as an error.
    pub fn from_yaml(yaml: &str) -> Result<Self, FrontMatterIssue> {
        let value: Value =
            serde_yaml::from_str(yaml).map_err(|e| FrontMatterIssue::Yaml(e.to_string()))?;
        match value {
            Value::Null => Ok(Self::default()),
            Value::Mapping(mapping) => {
                let fields = mapping
                    .into_iter()
                    .filter_map(|(k, v)| scalar_to_string(&k).map(|key| (key, v)))
                    .collect();
                Ok(Self { fields })
            }
            _ => Err(FrontMatterIssue::NotAMapping),
        }
    }

    /// Look up a key as text.
    ///
    /// Strings are returned as-is; numbers and booleans in their textual
    /// form. Nulls, sequences and mappings read as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        self.fields.get(key).and_then(scalar_to_string)
    }

    pub fn title(&self) -> Option<String> {
        self.get("title")
    }

    pub fn slug(&self) -> Option<String> {
        self.get("slug")
    }

    pub fn description(&self) -> Option<String> {
        self.get("description")
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let fields = iter
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        Self { fields }
    }
}

/// Why a front matter block was discarded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrontMatterIssue {
    /// Opening fence without a closing fence.
    #[error("front matter has no closing '---' line")]
    Unterminated,
    #[error("front matter is not valid YAML: {0}")]
    Yaml(String),
    /// Block parsed, but to a scalar or sequence rather than a mapping.
    #[error("front matter is not a key/value mapping")]
    NotAMapping,
}

/// Result of splitting a document into metadata and body.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDocument<'a> {
    pub metadata: Metadata,
    pub body: &'a str,
    /// Set when a front matter block was present but discarded.
    pub issue: Option<FrontMatterIssue>,
}

/// Split raw document text into front matter metadata and markdown body.
pub fn split_front_matter(text: &str) -> SplitDocument<'_> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let Some(after_open) = strip_fence_line(text) else {
        return SplitDocument {
            metadata: Metadata::default(),
            body: text,
            issue: None,
        };
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == FENCE {
            let yaml = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            return match Metadata::from_yaml(yaml) {
                Ok(metadata) => SplitDocument {
                    metadata,
                    body,
                    issue: None,
                },
                Err(issue) => SplitDocument {
                    metadata: Metadata::default(),
                    body,
                    issue: Some(issue),
                },
            };
        }
        offset += line.len();
    }

    SplitDocument {
        metadata: Metadata::default(),
        body: text,
        issue: Some(FrontMatterIssue::Unterminated),
    }
}

/// Split and log: the variant the build uses.
pub fn parse_document<'a>(text: &'a str, source: &str) -> (Metadata, &'a str) {
    let split = split_front_matter(text);
    match &split.issue {
        Some(issue) => warn!("{source}: {issue}; treating as plain markdown"),
        None if split.metadata.is_empty() => debug!("{source}: no front matter"),
        None => debug!(
            "{source}: front matter keys {:?}",
            split.metadata.keys().collect::<Vec<_>>()
        ),
    }
    (split.metadata, split.body)
}

/// If `text` opens with a fence line, return everything after it.
fn strip_fence_line(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(FENCE)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

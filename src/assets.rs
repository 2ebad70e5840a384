//! Static assets and the web app manifest.
//!
//! Assets live next to the page template and are copied to the output root
//! unchanged:
//!
//! ```text
//! templates/
//! ├── base.html                   # page template (not copied)
//! ├── style.css
//! ├── favicon.ico
//! ├── favicon-16x16.png
//! ├── favicon-32x32.png
//! ├── apple-touch-icon.png
//! ├── android-chrome-192x192.png
//! └── android-chrome-512x512.png
//! ```
//!
//! A missing asset is logged and skipped. `manifest.json` is generated from
//! the site config and references the icons at absolute root paths.

use crate::config::SiteInfo;
use log::{info, warn};
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Files copied from the template directory, stylesheet first.
pub const STATIC_ASSETS: &[&str] = &[
    "style.css",
    "favicon.ico",
    "favicon-16x16.png",
    "favicon-32x32.png",
    "apple-touch-icon.png",
    "android-chrome-192x192.png",
    "android-chrome-512x512.png",
];

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Copy every available static asset from `template_dir` to `output_dir`.
///
/// Returns the number of files copied.
pub fn copy_static_assets(template_dir: &Path, output_dir: &Path) -> Result<usize, AssetError> {
    let mut copied = 0;
    for name in STATIC_ASSETS {
        let source = template_dir.join(name);
        if !source.is_file() {
            warn!("Static asset not found: {}", source.display());
            continue;
        }
        let dest = output_dir.join(name);
        fs::copy(&source, &dest)?;
        info!("Copied {} to {}", name, dest.display());
        copied += 1;
    }
    Ok(copied)
}

/// Web app manifest (`manifest.json`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: &'static str,
    pub display: &'static str,
    pub background_color: &'static str,
    pub theme_color: &'static str,
    pub orientation: &'static str,
    pub scope: &'static str,
    pub lang: &'static str,
    pub icons: Vec<ManifestIcon>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestIcon {
    pub src: &'static str,
    pub sizes: &'static str,
    #[serde(rename = "type")]
    pub mime_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<&'static str>,
}

impl ManifestIcon {
    const fn png(src: &'static str, sizes: &'static str, purpose: Option<&'static str>) -> Self {
        Self {
            src,
            sizes,
            mime_type: "image/png",
            purpose,
        }
    }
}

impl WebManifest {
    pub fn for_site(site: &SiteInfo) -> Self {
        let short_name = site
            .name
            .split_whitespace()
            .next()
            .unwrap_or("Site")
            .to_string();
        Self {
            name: site.name.clone(),
            short_name,
            description: site.description.clone(),
            start_url: "/",
            display: "standalone",
            background_color: "#ffffff",
            theme_color: "#00a2e7",
            orientation: "portrait-primary",
            scope: "/",
            lang: "en",
            icons: vec![
                ManifestIcon::png("/android-chrome-192x192.png", "192x192", Some("any maskable")),
                ManifestIcon::png("/android-chrome-512x512.png", "512x512", Some("any maskable")),
                ManifestIcon::png("/apple-touch-icon.png", "180x180", None),
                ManifestIcon::png("/favicon-32x32.png", "32x32", None),
                ManifestIcon::png("/favicon-16x16.png", "16x16", None),
            ],
        }
    }

    pub fn to_json(&self) -> Result<String, AssetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write `manifest.json` to the output root.
pub fn write_manifest(site: &SiteInfo, output_dir: &Path) -> Result<(), AssetError> {
    let json = WebManifest::for_site(site).to_json()?;
    let path = output_dir.join(MANIFEST_FILE);
    fs::write(&path, json)?;
    info!("Generated {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn copies_available_assets_only() {
        let templates = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(templates.path().join("style.css"), "body {}").unwrap();
        fs::write(templates.path().join("favicon.ico"), [0u8, 1, 2]).unwrap();

        let copied = copy_static_assets(templates.path(), out.path()).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(
            fs::read_to_string(out.path().join("style.css")).unwrap(),
            "body {}"
        );
        assert!(out.path().join("favicon.ico").exists());
        assert!(!out.path().join("apple-touch-icon.png").exists());
    }

    #[test]
    fn template_is_not_copied() {
        let templates = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(templates.path().join("base.html"), "{content}").unwrap();

        let copied = copy_static_assets(templates.path(), out.path()).unwrap();

        assert_eq!(copied, 0);
        assert!(!out.path().join("base.html").exists());
    }

    #[test]
    fn short_name_is_first_word() {
        let site = SiteInfo {
            name: "Jgrove Personal Site".to_string(),
            description: "d".to_string(),
        };
        assert_eq!(WebManifest::for_site(&site).short_name, "Jgrove");
    }

    #[test]
    fn short_name_falls_back_for_blank_name() {
        let site = SiteInfo {
            name: " ".to_string(),
            description: String::new(),
        };
        assert_eq!(WebManifest::for_site(&site).short_name, "Site");
    }

    #[test]
    fn manifest_json_schema() {
        let json = WebManifest::for_site(&SiteInfo::default()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "Static Site");
        assert_eq!(value["short_name"], "Static");
        assert_eq!(value["start_url"], "/");
        assert_eq!(value["display"], "standalone");
        assert_eq!(value["theme_color"], "#00a2e7");
        assert_eq!(value["background_color"], "#ffffff");

        let icons = value["icons"].as_array().unwrap();
        assert_eq!(icons.len(), 5);
        assert_eq!(icons[0]["src"], "/android-chrome-192x192.png");
        assert_eq!(icons[0]["type"], "image/png");
        assert_eq!(icons[0]["purpose"], "any maskable");
        assert!(icons[2].get("purpose").is_none());
        for icon in icons {
            assert!(icon["src"].as_str().unwrap().starts_with('/'));
        }
    }

    #[test]
    fn manifest_icons_match_copied_assets() {
        let manifest = WebManifest::for_site(&SiteInfo::default());
        for icon in &manifest.icons {
            let name = icon.src.trim_start_matches('/');
            assert!(STATIC_ASSETS.contains(&name), "{name} is not a copied asset");
        }
    }

    #[test]
    fn write_manifest_creates_file() {
        let out = TempDir::new().unwrap();
        write_manifest(&SiteInfo::default(), out.path()).unwrap();
        let json = fs::read_to_string(out.path().join(MANIFEST_FILE)).unwrap();
        assert!(json.contains("\"scope\": \"/\""));
    }
}

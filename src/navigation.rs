//! Site-wide navigation.
//!
//! The [`NavigationModel`] is built once per build from the complete set of
//! resolved pages: one entry per output file, sorted by raw title
//! (case-sensitive, stable for equal titles). Pages that collide on an output
//! file contribute only the last one, the page that is left on disk. It is then rendered once per page, because the
//! `current` marker depends on which page is being emitted.
//!
//! ## Markup
//!
//! ```html
//! <nav class="site-navigation">
//!   <div class="nav-logo"><a href="/">Site Name</a></div>
//!   <div class="nav-links">
//!     <a href="/about">About</a>
//!     <a class="current" href="/blog/hello">Hello</a>
//!   </div>
//! </nav>
//! ```
//!
//! Labels go through [`display_name`] at render time; the model keeps raw
//! titles. Text is escaped by maud.

use crate::naming::display_name;
use crate::types::ResolvedPage;
use maud::{Markup, html};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub title: String,
    pub url_path: String,
}

/// Ordered navigation entries for one build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationModel {
    entries: Vec<NavEntry>,
}

impl NavigationModel {
    /// One entry per output file. When pages collide on an output path the
    /// later page replaces the earlier one, matching what ends up on disk.
    pub fn build(pages: &[ResolvedPage]) -> Self {
        let mut slots: HashMap<&Path, usize> = HashMap::new();
        let mut entries: Vec<NavEntry> = Vec::with_capacity(pages.len());
        for page in pages {
            let entry = NavEntry {
                title: page.title.clone(),
                url_path: page.url_path.clone(),
            };
            match slots.get(page.output_path.as_path()) {
                Some(&slot) => entries[slot] = entry,
                None => {
                    slots.insert(page.output_path.as_path(), entries.len());
                    entries.push(entry);
                }
            }
        }
        entries.sort_by(|a, b| a.title.cmp(&b.title));
        Self { entries }
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }
}

/// Render navigation markup for the page served at `current_url`.
///
/// An entry is current only when its URL equals `current_url` exactly;
/// `/contact` and `/contact/` are different URLs.
pub fn render_navigation(model: &NavigationModel, current_url: &str, site_name: &str) -> Markup {
    html! {
        nav.site-navigation {
            div.nav-logo {
                a href="/" { (site_name) }
            }
            div.nav-links {
                @for entry in model.entries() {
                    @let is_current = entry.url_path == current_url;
                    a class=[is_current.then_some("current")] href=(entry.url_path) {
                        (display_name(&entry.title))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::page;

    fn model() -> NavigationModel {
        NavigationModel::build(&[
            page("zebra", "/zebra"),
            page("about_us", "/about_us"),
            page("Blog", "/blog/"),
            page("home", "/"),
        ])
    }

    #[test]
    fn entries_sorted_by_raw_title() {
        let binding = model();
        let titles: Vec<&str> = binding.entries().iter().map(|e| e.title.as_str()).collect();
        // Uppercase sorts before lowercase
        assert_eq!(titles, vec!["Blog", "about_us", "home", "zebra"]);
    }

    #[test]
    fn equal_titles_keep_input_order() {
        let model = NavigationModel::build(&[page("Same", "/first"), page("Same", "/second")]);
        let urls: Vec<&str> = model.entries().iter().map(|e| e.url_path.as_str()).collect();
        assert_eq!(urls, vec!["/first", "/second"]);
    }

    #[test]
    fn colliding_pages_keep_last_entry() {
        // Both resolve to dist/index.html
        let model = NavigationModel::build(&[
            page("One", "/"),
            page("Two", "/"),
            page("Blog", "/blog"),
        ]);
        let titles: Vec<&str> = model.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Blog", "Two"]);

        let html = render_navigation(&model, "/", "Site").into_string();
        assert_eq!(html.matches(r#"class="current""#).count(), 1);
        assert!(html.contains(r#"<a class="current" href="/">Two</a>"#));
    }

    #[test]
    fn empty_model() {
        let model = NavigationModel::build(&[]);
        assert!(model.entries().is_empty());
        let html = render_navigation(&model, "/", "Site").into_string();
        assert!(html.contains("nav-logo"));
        assert!(!html.contains("current"));
    }

    #[test]
    fn model_keeps_raw_titles() {
        let model = model();
        assert!(model.entries().iter().any(|e| e.title == "about_us"));
    }

    #[test]
    fn renders_display_names() {
        let html = render_navigation(&model(), "", "Site").into_string();
        assert!(html.contains(">About Us</a>"));
        assert!(html.contains(">Zebra</a>"));
        assert!(!html.contains("about_us<"));
    }

    #[test]
    fn renders_logo_with_site_name() {
        let html = render_navigation(&model(), "", "Jgrove").into_string();
        assert!(html.contains(r#"<div class="nav-logo"><a href="/">Jgrove</a></div>"#));
    }

    #[test]
    fn marks_exactly_one_current() {
        let html = render_navigation(&model(), "/about_us", "Site").into_string();
        assert_eq!(html.matches(r#"class="current""#).count(), 1);
        assert!(html.contains(r#"<a class="current" href="/about_us">About Us</a>"#));
    }

    #[test]
    fn no_current_for_unknown_url() {
        let html = render_navigation(&model(), "/missing", "Site").into_string();
        assert!(!html.contains("current"));
    }

    #[test]
    fn current_match_is_exact() {
        // "/blog" does not match "/blog/"
        let html = render_navigation(&model(), "/blog", "Site").into_string();
        assert!(!html.contains("current"));
    }

    #[test]
    fn order_identical_across_pages() {
        let model = model();
        let strip = |s: String| s.replace(r#" class="current""#, "");
        let a = strip(render_navigation(&model, "/", "Site").into_string());
        let b = strip(render_navigation(&model, "/zebra", "Site").into_string());
        assert_eq!(a, b);
    }

    #[test]
    fn titles_are_escaped() {
        let model = NavigationModel::build(&[page("<script>x</script>", "/x")]);
        let html = render_navigation(&model, "", "Site").into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;"));
    }
}

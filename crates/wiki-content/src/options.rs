//! Admin option-page descriptors.
//!
//! The theme exposes its site-wide settings ("Theme Options" and its
//! "External services" sub-page) as typed descriptors. A host admin
//! layer consumes these to register the pages; no admin UI lives here.

use serde::Serialize;

/// Descriptor for one admin options page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionsPage {
    /// Page heading shown in the admin UI.
    pub page_title: &'static str,
    /// Menu entry label.
    pub menu_title: &'static str,
    /// Stable slug identifying the page.
    pub menu_slug: &'static str,
    /// Slug of the parent page, for sub-pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_slug: Option<&'static str>,
    /// Whether the host should redirect the parent to its first child.
    pub redirect: bool,
}

/// The option pages this theme registers with the host.
#[must_use]
pub fn theme_options_pages() -> Vec<OptionsPage> {
    vec![
        OptionsPage {
            page_title: "Theme Options",
            menu_title: "Theme Options",
            menu_slug: "theme-options",
            parent_slug: None,
            redirect: false,
        },
        OptionsPage {
            page_title: "External services",
            menu_title: "External services",
            menu_slug: "external-services",
            parent_slug: Some("theme-options"),
            redirect: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sub_page_points_at_root_page() {
        let pages = theme_options_pages();
        assert_eq!(pages.len(), 2);
        let root = &pages[0];
        let sub = &pages[1];
        assert_eq!(root.parent_slug, None);
        assert_eq!(sub.parent_slug, Some(root.menu_slug));
    }

    #[test]
    fn test_serializes_without_null_parent() {
        let pages = theme_options_pages();
        let json = serde_json::to_value(&pages[0]).unwrap();
        assert_eq!(json.get("parent_slug"), None);
        assert_eq!(json["menu_slug"], "theme-options");
    }
}

//! Link table and render plan for the header.
//!
//! [`HeaderLayout`] turns [`HeaderOptions`] into the class strings and the
//! set of elements a renderer has to produce. Renderers stay free of option
//! logic.

use crate::options::HeaderOptions;

/// Class set on the document body while the mobile panel is open.
pub const MARKER_CLASS: &str = "off-nav-is-active";

/// Class shared by the outer header and the inner row when a divider is on.
pub const DIVIDER_CLASS: &str = "has-bottom-divider";

/// Screen-reader label of the toggle button.
pub const TOGGLE_LABEL: &str = "Menu";

/// Element id of the collapsible navigation panel.
pub const PANEL_ID: &str = "site-header-nav";

/// An in-page navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Visible label.
    pub label: &'static str,
    /// Id of the element the link scrolls to.
    pub anchor: &'static str,
}

impl NavLink {
    /// Create a link.
    #[must_use]
    pub const fn new(label: &'static str, anchor: &'static str) -> Self {
        Self { label, anchor }
    }

    /// The `href` value, `#anchor`.
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// The four section links, in display order.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink::new("HOME", "home"),
    NavLink::new("ABOUT", "about"),
    NavLink::new("TEAM", "team"),
    NavLink::new("CONTACT", "contact"),
];

/// The call-to-action link shown at the right of the panel.
pub const CALL_TO_ACTION: NavLink = NavLink::new("PORTFOLIO", "portfolio");

/// Classes of the call-to-action link.
pub const CALL_TO_ACTION_CLASS: &str = "button portfolio-button button-wide-mobile button-sm";

/// Join the present, non-empty class fragments with single spaces.
pub fn class_names<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// What the header renders for a given set of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Classes of the outer `<header>`.
    pub header_class: String,
    /// Classes of the inner row.
    pub inner_class: String,
    /// Classes of the four-link list.
    pub nav_list_class: String,
    /// Whether the toggle button and panel are rendered.
    pub show_nav: bool,
    /// Whether the call-to-action list is rendered.
    pub show_call_to_action: bool,
}

impl HeaderLayout {
    /// Build the render plan for `options`.
    #[must_use]
    pub fn from_options(options: &HeaderOptions) -> Self {
        let header_class = class_names([
            Some("site-header"),
            options.bottom_outer_divider.then_some(DIVIDER_CLASS),
            options.class.as_deref(),
            Some("header_fixed"),
        ]);
        let inner_class = class_names([
            Some("site-header-inner"),
            options.bottom_divider.then_some(DIVIDER_CLASS),
        ]);
        let position_class = options
            .nav_position()
            .map(|position| format!("header-nav-{position}"));
        let nav_list_class = class_names([Some("list-reset text-xs"), position_class.as_deref()]);

        Self {
            header_class,
            inner_class,
            nav_list_class,
            show_nav: !options.hide_nav,
            show_call_to_action: !options.hide_nav && !options.hide_signin,
        }
    }

    /// Section links to render (empty when the navigation is hidden).
    #[must_use]
    pub fn nav_links(&self) -> &'static [NavLink] {
        if self.show_nav { &NAV_LINKS } else { &[] }
    }

    /// The call-to-action link, if rendered.
    #[must_use]
    pub const fn call_to_action(&self) -> Option<&'static NavLink> {
        if self.show_call_to_action {
            Some(&CALL_TO_ACTION)
        } else {
            None
        }
    }
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self::from_options(&HeaderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names_skips_empty() {
        assert_eq!(class_names([Some("a"), None, Some(""), Some(" b ")]), "a b");
        assert_eq!(class_names([None, None]), "");
    }

    #[test]
    fn test_link_table() {
        let labels: Vec<_> = NAV_LINKS.iter().map(|link| link.label).collect();
        assert_eq!(labels, ["HOME", "ABOUT", "TEAM", "CONTACT"]);
        assert_eq!(NAV_LINKS[2].href(), "#team");
        assert_eq!(CALL_TO_ACTION.href(), "#portfolio");
    }

    #[test]
    fn test_default_layout() {
        let layout = HeaderLayout::default();
        assert_eq!(layout.header_class, "site-header header_fixed");
        assert_eq!(layout.inner_class, "site-header-inner");
        assert_eq!(layout.nav_list_class, "list-reset text-xs");
        assert_eq!(layout.nav_links().len(), 4);
        assert_eq!(layout.call_to_action(), Some(&CALL_TO_ACTION));
    }

    #[test]
    fn test_dividers_and_extra_class() {
        let options = HeaderOptions::new()
            .with_bottom_outer_divider(true)
            .with_bottom_divider(true)
            .with_class("invert-color");
        let layout = HeaderLayout::from_options(&options);

        assert_eq!(
            layout.header_class,
            "site-header has-bottom-divider invert-color header_fixed"
        );
        assert_eq!(layout.inner_class, "site-header-inner has-bottom-divider");
    }

    #[test]
    fn test_nav_position_class() {
        let layout = HeaderLayout::from_options(&HeaderOptions::new().with_nav_position("right"));
        assert_eq!(layout.nav_list_class, "list-reset text-xs header-nav-right");

        let layout = HeaderLayout::from_options(&HeaderOptions::new().with_nav_position(""));
        assert_eq!(layout.nav_list_class, "list-reset text-xs");
    }

    #[test]
    fn test_hide_nav_hides_everything() {
        let layout = HeaderLayout::from_options(&HeaderOptions::new().with_hide_nav(true));
        assert!(!layout.show_nav);
        assert!(layout.nav_links().is_empty());
        assert!(layout.call_to_action().is_none());
    }

    #[test]
    fn test_hide_signin_keeps_links() {
        let layout = HeaderLayout::from_options(&HeaderOptions::new().with_hide_signin(true));
        assert!(layout.show_nav);
        assert_eq!(layout.nav_links(), &NAV_LINKS);
        assert!(layout.call_to_action().is_none());
    }
}

//! Header configuration.
//!
//! Every option is optional. An embedding page can build the options in code
//! or ship them as JSON next to the markup.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Display options for the site header.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderOptions {
    /// Position suffix for the link list (`right` yields `header-nav-right`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav_position: Option<String>,
    /// Hide the toggle button and the whole navigation panel.
    pub hide_nav: bool,
    /// Hide the call-to-action link.
    pub hide_signin: bool,
    /// Draw a divider under the outer header element.
    pub bottom_outer_divider: bool,
    /// Draw a divider under the inner header row.
    pub bottom_divider: bool,
    /// Extra classes appended to the outer header element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl HeaderOptions {
    /// Create options with every field at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the link list position suffix.
    #[must_use]
    pub fn with_nav_position(mut self, position: impl Into<String>) -> Self {
        self.nav_position = Some(position.into());
        self
    }

    /// Hide or show the navigation block.
    #[must_use]
    pub const fn with_hide_nav(mut self, hide: bool) -> Self {
        self.hide_nav = hide;
        self
    }

    /// Hide or show the call-to-action link.
    #[must_use]
    pub const fn with_hide_signin(mut self, hide: bool) -> Self {
        self.hide_signin = hide;
        self
    }

    /// Toggle the outer divider.
    #[must_use]
    pub const fn with_bottom_outer_divider(mut self, divider: bool) -> Self {
        self.bottom_outer_divider = divider;
        self
    }

    /// Toggle the inner divider.
    #[must_use]
    pub const fn with_bottom_divider(mut self, divider: bool) -> Self {
        self.bottom_divider = divider;
        self
    }

    /// Append extra classes to the outer header element.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// The position suffix, treating an empty string as unset.
    pub fn nav_position(&self) -> Option<&str> {
        self.nav_position
            .as_deref()
            .map(str::trim)
            .filter(|position| !position.is_empty())
    }
}

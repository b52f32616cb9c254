//! Mobile menu state machine.
//!
//! The menu has two states. Opening expands the panel to its content height
//! and sets the body marker class; closing undoes both. [`Menu`] applies
//! these effects through a [`MenuHost`], so the same logic drives the browser
//! adapter and the test doubles.

use tracing::{debug, warn};

use crate::error::Result;

/// Key code reported by legacy browsers for Escape.
pub const ESCAPE_KEY_CODE: u32 = 27;

/// Whether the mobile panel is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Panel collapsed, marker class absent.
    #[default]
    Closed,
    /// Panel expanded, marker class present.
    Open,
}

impl MenuState {
    /// Returns true when the panel is expanded.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl std::fmt::Display for MenuState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "closed"),
            Self::Open => write!(f, "open"),
        }
    }
}

/// A key-down event reduced to what the menu looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// `KeyboardEvent.key`.
    pub key: String,
    /// `KeyboardEvent.keyCode`.
    pub key_code: u32,
}

impl KeyPress {
    /// Create a key press.
    pub fn new(key: impl Into<String>, key_code: u32) -> Self {
        Self {
            key: key.into(),
            key_code,
        }
    }

    /// An Escape key press.
    #[must_use]
    pub fn escape() -> Self {
        Self::new("Escape", ESCAPE_KEY_CODE)
    }

    /// Returns true for Escape, including the old `Esc` name.
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.key == "Escape" || self.key == "Esc" || self.key_code == ESCAPE_KEY_CODE
    }
}

/// Where a document click landed, relative to the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// On the toggle button or one of its children.
    Toggle,
    /// Inside the navigation panel.
    Panel,
    /// Anywhere else on the page.
    Outside,
}

impl ClickOrigin {
    /// Classify a click from whether its target sits inside the toggle
    /// button and inside the panel.
    ///
    /// The toggle wins over the panel, so the toggle is never outside.
    pub const fn from_containment(on_toggle: bool, in_panel: bool) -> Self {
        if on_toggle {
            Self::Toggle
        } else if in_panel {
            Self::Panel
        } else {
            Self::Outside
        }
    }
}

/// Presentation side effects the menu needs from its host page.
///
/// Implementations report failures; [`Menu`] logs them and skips the step.
#[cfg_attr(test, mockall::automock)]
pub trait MenuHost {
    /// Set the panel height to its natural content height.
    fn expand_panel(&self) -> Result<()>;

    /// Clear the panel height so it collapses.
    fn collapse_panel(&self) -> Result<()>;

    /// Add or remove the body marker class.
    fn set_marker(&self, active: bool) -> Result<()>;

    /// Smoothly scroll the element with id `anchor` into view.
    ///
    /// Returns `Ok(false)` when no such element exists.
    fn scroll_to(&self, anchor: &str) -> Result<bool>;

    /// Called after every open or close with the resulting state.
    fn state_changed(&self, state: MenuState);
}

/// The mobile menu controller.
#[derive(Debug)]
pub struct Menu<H: MenuHost> {
    host: H,
    state: MenuState,
}

impl<H: MenuHost> Menu<H> {
    /// Create a closed menu. Nothing is applied to the host yet.
    pub const fn new(host: H) -> Self {
        Self {
            host,
            state: MenuState::Closed,
        }
    }

    /// Current state.
    pub const fn state(&self) -> MenuState {
        self.state
    }

    /// Returns true when the panel is expanded.
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The host this menu drives.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Expand the panel and set the marker class.
    pub fn open(&mut self) {
        self.apply_open();
        self.state = MenuState::Open;
        debug!("Menu opened");
        self.host.state_changed(self.state);
    }

    /// Collapse the panel and remove the marker class.
    ///
    /// Always applies the effects, so closing an already closed menu is safe.
    pub fn close(&mut self) {
        report("collapse panel", self.host.collapse_panel());
        report("remove marker class", self.host.set_marker(false));
        self.state = MenuState::Closed;
        debug!("Menu closed");
        self.host.state_changed(self.state);
    }

    /// Open when closed, close when open.
    pub fn toggle(&mut self) -> MenuState {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
        self.state
    }

    /// Re-apply the open effects if the menu is open.
    ///
    /// The panel's content height can change while it is open (fonts load,
    /// the viewport rotates), so hosts call this on re-evaluation.
    pub fn reapply(&mut self) {
        if self.is_open() {
            self.apply_open();
        }
    }

    /// Handle a document key-down. Returns true if the menu closed.
    pub fn handle_key(&mut self, key: &KeyPress) -> bool {
        if self.is_open() && key.is_escape() {
            self.close();
            return true;
        }
        false
    }

    /// Handle a document click. Returns true if the menu closed.
    pub fn handle_click(&mut self, origin: ClickOrigin) -> bool {
        if self.is_open() && origin == ClickOrigin::Outside {
            self.close();
            return true;
        }
        false
    }

    /// Close the menu, then scroll to `anchor` if it exists.
    ///
    /// Returns true if a scroll was requested. An empty anchor or a missing
    /// target only closes the menu.
    pub fn navigate(&mut self, anchor: &str) -> bool {
        self.close();

        if anchor.is_empty() {
            return false;
        }
        match self.host.scroll_to(anchor) {
            Ok(true) => {
                debug!(anchor, "Scrolled to anchor");
                true
            }
            Ok(false) => {
                debug!(anchor, "Anchor target not found, skipping scroll");
                false
            }
            Err(e) => {
                warn!(anchor, "Failed to scroll to anchor: {e}");
                false
            }
        }
    }

    fn apply_open(&self) {
        report("expand panel", self.host.expand_panel());
        report("add marker class", self.host.set_marker(true));
    }
}

/// Log a failed side effect. Missing elements are expected and only traced.
fn report(step: &str, result: Result<()>) {
    match result {
        Ok(()) => {}
        Err(e) if e.is_missing_element() => debug!("Skipped {step}: {e}"),
        Err(e) => warn!("Failed to {step}: {e}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::Error;
    use mockall::predicate::eq;

    fn quiet_host() -> MockMenuHost {
        let mut host = MockMenuHost::new();
        host.expect_expand_panel().returning(|| Ok(()));
        host.expect_collapse_panel().returning(|| Ok(()));
        host.expect_set_marker().returning(|_| Ok(()));
        host.expect_state_changed().returning(|_| ());
        host
    }

    #[test]
    fn test_key_press_escape_variants() {
        assert!(KeyPress::escape().is_escape());
        assert!(KeyPress::new("Esc", 0).is_escape());
        assert!(KeyPress::new("", ESCAPE_KEY_CODE).is_escape());
        assert!(!KeyPress::new("Enter", 13).is_escape());
    }

    #[test]
    fn test_menu_state_display() {
        assert_eq!(MenuState::Open.to_string(), "open");
        assert_eq!(MenuState::Closed.to_string(), "closed");
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn test_open_applies_effects_in_order() {
        let mut host = MockMenuHost::new();
        let mut seq = mockall::Sequence::new();
        host.expect_expand_panel()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        host.expect_set_marker()
            .with(eq(true))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        host.expect_state_changed()
            .with(eq(MenuState::Open))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| ());

        let mut menu = Menu::new(host);
        menu.open();
        assert!(menu.is_open());
    }

    #[test]
    fn test_close_applies_effects() {
        let mut host = MockMenuHost::new();
        host.expect_collapse_panel().times(1).returning(|| Ok(()));
        host.expect_set_marker()
            .with(eq(false))
            .times(1)
            .returning(|_| Ok(()));
        host.expect_state_changed()
            .with(eq(MenuState::Closed))
            .times(1)
            .returning(|_| ());

        let mut menu = Menu::new(host);
        menu.close();
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_escape_while_closed_touches_nothing() {
        let mut host = MockMenuHost::new();
        host.expect_expand_panel().never();
        host.expect_collapse_panel().never();
        host.expect_set_marker().never();
        host.expect_state_changed().never();

        let mut menu = Menu::new(host);
        assert!(!menu.handle_key(&KeyPress::escape()));
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_reapply_only_when_open() {
        let mut host = MockMenuHost::new();
        host.expect_expand_panel().times(2).returning(|| Ok(()));
        host.expect_set_marker()
            .with(eq(true))
            .times(2)
            .returning(|_| Ok(()));
        host.expect_state_changed().times(1).returning(|_| ());

        let mut menu = Menu::new(host);
        menu.reapply();
        menu.open();
        menu.reapply();
    }

    #[test]
    fn test_effect_failures_do_not_block_transition() {
        let mut host = MockMenuHost::new();
        host.expect_expand_panel()
            .returning(|| Err(Error::MissingElement("panel")));
        host.expect_collapse_panel()
            .returning(|| Err(Error::Dom("style is read-only".to_string())));
        host.expect_set_marker().returning(|_| Ok(()));
        host.expect_state_changed().returning(|_| ());

        let mut menu = Menu::new(host);
        assert_eq!(menu.toggle(), MenuState::Open);
        assert_eq!(menu.toggle(), MenuState::Closed);
    }

    #[test]
    fn test_click_origins() {
        let mut menu = Menu::new(quiet_host());
        menu.open();

        assert!(!menu.handle_click(ClickOrigin::Panel));
        assert!(!menu.handle_click(ClickOrigin::Toggle));
        assert!(menu.is_open());

        assert!(menu.handle_click(ClickOrigin::Outside));
        assert!(!menu.is_open());

        // Outside click while closed is a no-op.
        assert!(!menu.handle_click(ClickOrigin::Outside));
    }

    #[test]
    fn test_click_origin_from_containment() {
        assert_eq!(ClickOrigin::from_containment(true, false), ClickOrigin::Toggle);
        assert_eq!(ClickOrigin::from_containment(true, true), ClickOrigin::Toggle);
        assert_eq!(ClickOrigin::from_containment(false, true), ClickOrigin::Panel);
        assert_eq!(ClickOrigin::from_containment(false, false), ClickOrigin::Outside);

        // A click on the toggle never closes an open menu.
        let mut menu = Menu::new(quiet_host());
        menu.open();
        assert!(!menu.handle_click(ClickOrigin::from_containment(true, false)));
        assert!(menu.is_open());
    }

    #[test]
    fn test_navigate_scrolls_after_closing() {
        let mut host = quiet_host();
        host.expect_scroll_to()
            .with(eq("team"))
            .times(1)
            .returning(|_| Ok(true));

        let mut menu = Menu::new(host);
        menu.open();
        assert!(menu.navigate("team"));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_navigate_missing_target() {
        let mut host = quiet_host();
        host.expect_scroll_to().returning(|_| Ok(false));

        let mut menu = Menu::new(host);
        assert!(!menu.navigate("nowhere"));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_navigate_empty_anchor_skips_scroll() {
        let mut host = quiet_host();
        host.expect_scroll_to().never();

        let mut menu = Menu::new(host);
        menu.open();
        assert!(!menu.navigate(""));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_navigate_scroll_error_is_swallowed() {
        let mut host = quiet_host();
        host.expect_scroll_to()
            .returning(|_| Err(Error::Dom("scrollIntoView unsupported".to_string())));

        let mut menu = Menu::new(host);
        assert!(!menu.navigate("about"));
    }
}

//! Theme configuration for `Sitenav`.
//!
//! Light marketing palette with a single brand accent. The header stylesheet
//! is generated here so the panel transition and the body marker class stay
//! in sync with the menu logic in `sitenav-core`.

use sitenav_core::{DIVIDER_CLASS, MARKER_CLASS};

/// Color palette.
pub mod colors {
    /// Page background.
    pub const BACKGROUND: &str = "#ffffff";
    /// Header background once scrolled or on mobile.
    pub const SURFACE: &str = "#151719";
    /// Primary text.
    pub const TEXT: &str = "#9ca9b3";
    /// Emphasized text (links, headings).
    pub const TEXT_STRONG: &str = "#eceded";
    /// Brand accent.
    pub const ACCENT: &str = "#6163ff";
    /// Accent hover state.
    pub const ACCENT_HOVER: &str = "#7b7dff";
    /// Divider lines.
    pub const DIVIDER: &str = "#25282c";
}

/// Typography configuration.
pub mod typography {
    /// Body font stack.
    pub const FONT_FAMILY: &str =
        "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";
    /// Navigation link size.
    pub const NAV_SIZE: &str = "0.875rem";
    /// Navigation letter spacing.
    pub const NAV_TRACKING: &str = "0.05em";
}

/// Layout metrics.
pub mod metrics {
    /// Header row height on mobile.
    pub const HEADER_HEIGHT_MOBILE: &str = "80px";
    /// Header row height on desktop.
    pub const HEADER_HEIGHT_DESKTOP: &str = "80px";
    /// Width where the panel turns into an inline link bar.
    pub const DESKTOP_BREAKPOINT: &str = "641px";
    /// Container max width.
    pub const CONTAINER_WIDTH: &str = "1080px";
}

/// Animation/transition configuration.
pub mod animation {
    /// Panel expand/collapse.
    pub const PANEL: &str = "0.25s cubic-bezier(0.0, 0.0, 0.2, 1)";
    /// Hamburger bar morph.
    pub const HAMBURGER: &str = "0.15s ease-in-out";
}

/// Generate CSS custom properties for the theme.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  /* Colors */
  --bg: {background};
  --surface: {surface};
  --text: {text};
  --text-strong: {text_strong};
  --accent: {accent};
  --accent-hover: {accent_hover};
  --divider: {divider};

  /* Typography */
  --font-family: {font_family};
  --nav-size: {nav_size};
  --nav-tracking: {nav_tracking};

  /* Layout */
  --header-height-mobile: {header_mobile};
  --header-height-desktop: {header_desktop};
  --container-width: {container};

  /* Transitions */
  --transition-panel: {panel};
  --transition-hamburger: {hamburger};
}}",
        background = colors::BACKGROUND,
        surface = colors::SURFACE,
        text = colors::TEXT,
        text_strong = colors::TEXT_STRONG,
        accent = colors::ACCENT,
        accent_hover = colors::ACCENT_HOVER,
        divider = colors::DIVIDER,
        font_family = typography::FONT_FAMILY,
        nav_size = typography::NAV_SIZE,
        nav_tracking = typography::NAV_TRACKING,
        header_mobile = metrics::HEADER_HEIGHT_MOBILE,
        header_desktop = metrics::HEADER_HEIGHT_DESKTOP,
        container = metrics::CONTAINER_WIDTH,
        panel = animation::PANEL,
        hamburger = animation::HAMBURGER,
    )
}

/// Generate the page and header stylesheet.
///
/// Below the breakpoint the panel is collapsed with `max-height: 0` and the
/// menu expands it inline. Above it the panel is always visible.
pub fn header_stylesheet() -> String {
    format!(
        r"body {{ margin: 0; background: var(--bg); color: var(--text); font-family: var(--font-family); }}
.section {{ min-height: 100vh; padding-top: var(--header-height-mobile); }}
.site-header {{ position: relative; z-index: 10; font-family: var(--font-family); }}
.site-header.header_fixed {{ position: fixed; top: 0; left: 0; right: 0; background: var(--surface); }}
.site-header.{divider},
.site-header-inner.{divider} {{ border-bottom: 1px solid var(--divider); }}
.site-header .container {{ max-width: var(--container-width); margin: 0 auto; padding: 0 16px; }}
.site-header-inner {{ position: relative; display: flex; justify-content: space-between; align-items: center; height: var(--header-height-mobile); }}
.brand .logo {{ color: var(--text-strong); text-decoration: none; font-weight: 700; }}
.screen-reader {{ position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0 0 0 0); }}
.header-nav-toggle {{ background: none; border: 0; cursor: pointer; padding: 0; }}
.hamburger, .hamburger-inner {{ display: block; position: relative; width: 24px; height: 2px; }}
.hamburger-inner, .hamburger-inner::before, .hamburger-inner::after {{ background: var(--text-strong); transition: transform var(--transition-hamburger); }}
.hamburger-inner::before, .hamburger-inner::after {{ content: ''; position: absolute; left: 0; width: 24px; height: 2px; }}
.hamburger-inner::before {{ top: -7px; }}
.hamburger-inner::after {{ bottom: -7px; }}
.{marker} .hamburger-inner {{ transform: rotate(225deg); }}
.{marker} .hamburger-inner::before {{ top: 0; opacity: 0; }}
.{marker} .hamburger-inner::after {{ bottom: 0; transform: rotate(-90deg); }}
.header-nav {{ position: absolute; top: 100%; left: 0; right: 0; max-height: 0; overflow: hidden; background: var(--surface); opacity: 0; transition: max-height var(--transition-panel), opacity var(--transition-panel); }}
.header-nav.is-active {{ opacity: 1; }}
.header-nav .list-reset {{ list-style: none; margin: 0; padding: 0; }}
.header-nav a {{ display: block; padding: 12px 24px; color: var(--text-strong); font-size: var(--nav-size); letter-spacing: var(--nav-tracking); text-decoration: none; }}
.header-nav a:hover {{ color: var(--accent-hover); }}
.header-nav .button {{ margin: 12px 24px; padding: 8px 24px; border-radius: 2px; background: var(--accent); text-align: center; }}
.header-nav .button-wide-mobile {{ display: block; }}
@media (min-width: {breakpoint}) {{
  .site-header-inner {{ height: var(--header-height-desktop); }}
  .header-nav-toggle {{ display: none; }}
  .header-nav {{ position: static; display: flex; flex-grow: 1; max-height: none !important; overflow: visible; opacity: 1; background: none; }}
  .header-nav-inner {{ display: flex; flex-grow: 1; align-items: center; }}
  .header-nav .list-reset {{ display: flex; align-items: center; }}
  .header-nav .header-nav-right {{ justify-content: flex-end; flex-grow: 1; }}
  .header-nav .header-nav-center:first-of-type {{ justify-content: flex-end; flex-grow: 1; }}
  .header-nav a {{ padding: 0 16px; }}
  .header-nav .button {{ margin: 0 0 0 32px; }}
  .header-nav .button-wide-mobile {{ display: inline-block; }}
}}",
        divider = DIVIDER_CLASS,
        marker = MARKER_CLASS,
        breakpoint = metrics::DESKTOP_BREAKPOINT,
    )
}

//! `Sitenav` Core Library
//!
//! This crate provides the host-independent parts of the site header:
//! - Header options with defaults, loadable from JSON
//! - The fixed section link table and the render plan derived from options
//! - The mobile menu state machine and the [`MenuHost`] seam it drives
//! - Document listener subscriptions released on drop
//!
//! The browser adapter lives in the `sitenav-ui` crate. Everything here is
//! plain Rust and is tested natively.
//!
//! ```rust,ignore
//! use sitenav_core::{Menu, MenuState};
//!
//! let mut menu = Menu::new(host);
//! assert_eq!(menu.toggle(), MenuState::Open);
//! menu.navigate("about");
//! assert_eq!(menu.state(), MenuState::Closed);
//! ```

pub mod error;
pub mod menu;
pub mod mount;
pub mod nav;
pub mod options;
pub mod subscription;

pub use error::{Error, Result};
pub use menu::{ClickOrigin, ESCAPE_KEY_CODE, KeyPress, Menu, MenuHost, MenuState};
pub use mount::MountedMenu;
pub use nav::{
    CALL_TO_ACTION, CALL_TO_ACTION_CLASS, DIVIDER_CLASS, HeaderLayout, MARKER_CLASS, NAV_LINKS,
    NavLink, PANEL_ID, TOGGLE_LABEL, class_names,
};
pub use options::HeaderOptions;
pub use subscription::{ClickHandler, DocumentEvents, KeyHandler, Subscription};

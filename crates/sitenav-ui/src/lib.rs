//! `Sitenav` UI - Leptos-based site header.
//!
//! This crate renders the header and binds the menu logic from
//! `sitenav-core` to the browser DOM.

pub mod app;
pub mod components;
pub mod dom;
pub mod theme;

pub use app::App;
pub use components::{Header, Logo};

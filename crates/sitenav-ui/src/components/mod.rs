//! UI components for `Sitenav`.

pub mod header;
pub mod logo;

pub use header::Header;
pub use logo::Logo;

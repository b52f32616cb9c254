//! Error types for Sitenav core operations.
//!
//! None of these reach the visitor. Menu transitions log them and carry on,
//! so a failing DOM call degrades to a skipped side effect.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the header on a host page.
#[derive(Debug, Error)]
pub enum Error {
    /// A host element (panel, body, window) is not available.
    #[error("Element not available: {0}")]
    MissingElement(&'static str),

    /// The host rejected a DOM operation.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// A document-level listener could not be registered.
    #[error("Failed to register {event} listener: {message}")]
    Listener {
        /// Event name (e.g. `keydown`).
        event: &'static str,
        /// Message reported by the host.
        message: String,
    },

    /// Header options could not be parsed.
    #[error("Invalid header options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error only reports that an element is absent.
    ///
    /// Absence is an expected outcome (the panel is not rendered when the
    /// navigation is hidden, and is gone during teardown).
    #[must_use]
    pub const fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_display() {
        let err = Error::MissingElement("panel");
        assert_eq!(err.to_string(), "Element not available: panel");
        assert!(err.is_missing_element());
    }

    #[test]
    fn test_listener_error_display() {
        let err = Error::Listener {
            event: "keydown",
            message: "document closed".to_string(),
        };
        assert!(err.to_string().contains("keydown"));
        assert!(err.to_string().contains("document closed"));
        assert!(!err.is_missing_element());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::InvalidOptions(_)));
    }
}

//! Document event subscriptions.
//!
//! A [`Subscription`] owns the release action of one registered listener and
//! runs it when dropped. [`DocumentEvents`] is the seam a host implements to
//! register the two document-wide listeners the header needs.

use std::fmt;

use crate::error::Result;
use crate::menu::{ClickOrigin, KeyPress};

/// Boxed key-down handler.
pub type KeyHandler = Box<dyn FnMut(KeyPress)>;

/// Boxed click handler.
pub type ClickHandler = Box<dyn FnMut(ClickOrigin)>;

/// Handle to a registered listener. Dropping it removes the listener.
#[must_use = "dropping a Subscription removes its listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the action that removes a listener.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Whether the listener is still registered.
    pub const fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Remove the listener now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Registration of document-wide listeners.
pub trait DocumentEvents {
    /// Listen for `keydown` on the document.
    fn on_key_down(&self, handler: KeyHandler) -> Result<Subscription>;

    /// Listen for `click` on the document. The host classifies the target.
    fn on_click(&self, handler: ClickHandler) -> Result<Subscription>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_drop_releases_once() {
        let released = Rc::new(Cell::new(0));
        let counter = Rc::clone(&released);
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));

        assert!(subscription.is_active());
        drop(subscription);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_explicit_release() {
        let released = Rc::new(Cell::new(0));
        let counter = Rc::clone(&released);
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));

        subscription.release();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_debug_shows_state() {
        let subscription = Subscription::new(|| {});
        assert!(format!("{subscription:?}").contains("active: true"));
    }
}

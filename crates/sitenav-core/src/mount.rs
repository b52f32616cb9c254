//! A menu bound to the document for the lifetime of a mounted header.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::error::Result;
use crate::menu::{Menu, MenuHost, MenuState};
use crate::subscription::{DocumentEvents, Subscription};

/// A [`Menu`] plus its document listeners.
///
/// [`mount`](Self::mount) registers one `keydown` and one `click` listener.
/// Dropping the value closes the menu and then removes both listeners, so
/// teardown runs on every exit path.
#[derive(Debug)]
pub struct MountedMenu<H: MenuHost + 'static> {
    menu: Rc<RefCell<Menu<H>>>,
    subscriptions: Vec<Subscription>,
}

impl<H: MenuHost + 'static> MountedMenu<H> {
    /// Create the menu and register its document listeners.
    ///
    /// If the second registration fails, the first listener is released
    /// before the error is returned.
    pub fn mount(host: H, events: &impl DocumentEvents) -> Result<Self> {
        let menu = Rc::new(RefCell::new(Menu::new(host)));

        let key_menu = Rc::clone(&menu);
        let key_down = events.on_key_down(Box::new(move |key| {
            with_menu(&key_menu, |menu| {
                menu.handle_key(&key);
            });
        }))?;

        let click_menu = Rc::clone(&menu);
        let click = events.on_click(Box::new(move |origin| {
            with_menu(&click_menu, |menu| {
                menu.handle_click(origin);
            });
        }))?;

        debug!("Header menu mounted");
        Ok(Self {
            menu,
            subscriptions: vec![key_down, click],
        })
    }

    /// Create the menu without document listeners.
    ///
    /// The toggle and navigation still work; Escape and outside clicks do not.
    pub fn detached(host: H) -> Self {
        Self {
            menu: Rc::new(RefCell::new(Menu::new(host))),
            subscriptions: Vec::new(),
        }
    }

    /// Number of document listeners held.
    pub fn listener_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Current state, or `None` while a handler holds the menu.
    pub fn state(&self) -> Option<MenuState> {
        self.menu.try_borrow().ok().map(|menu| menu.state())
    }

    /// Toggle the menu. Returns the new state, or `None` if the menu was busy.
    pub fn toggle(&self) -> Option<MenuState> {
        with_menu(&self.menu, Menu::toggle)
    }

    /// Close the menu.
    pub fn close(&self) {
        with_menu(&self.menu, Menu::close);
    }

    /// Re-apply the open effects if the menu is open.
    pub fn reapply(&self) {
        with_menu(&self.menu, Menu::reapply);
    }

    /// Close the menu and scroll to `anchor`. Returns true if it scrolled.
    pub fn navigate(&self, anchor: &str) -> bool {
        with_menu(&self.menu, |menu| menu.navigate(anchor)).unwrap_or(false)
    }
}

impl<H: MenuHost + 'static> Drop for MountedMenu<H> {
    fn drop(&mut self) {
        self.close();
        for subscription in self.subscriptions.drain(..) {
            subscription.release();
        }
        debug!("Header menu unmounted");
    }
}

/// Run `f` on the menu unless it is already borrowed by an outer handler.
fn with_menu<H, R>(menu: &RefCell<Menu<H>>, f: impl FnOnce(&mut Menu<H>) -> R) -> Option<R>
where
    H: MenuHost,
{
    match menu.try_borrow_mut() {
        Ok(mut menu) => Some(f(&mut menu)),
        Err(_) => {
            debug!("Menu busy, dropping nested event");
            None
        }
    }
}

//! Browser bindings for the header menu.
//!
//! [`WebHost`] applies menu effects to the live DOM through the header's
//! node refs. [`WebDocument`] registers document-wide listeners and hands
//! back [`Subscription`]s that remove them when dropped.

use leptos::html::{Button, Nav};
use leptos::prelude::*;
use sitenav_core::{
    ClickHandler, ClickOrigin, DocumentEvents, Error, HeaderOptions, KeyHandler, KeyPress,
    MARKER_CLASS, MenuHost, MenuState, Result, Subscription,
};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions};

/// Convert a rejected DOM call into a core error.
fn dom_error(value: JsValue) -> Error {
    Error::Dom(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

fn html_document() -> Result<web_sys::Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(Error::MissingElement("document"))
}

/// Menu host backed by the header's panel and toggle elements.
#[derive(Clone, Copy)]
pub struct WebHost {
    panel: NodeRef<Nav>,
    toggle: NodeRef<Button>,
    state: WriteSignal<MenuState>,
}

impl WebHost {
    /// Create a host. `state` mirrors every transition for rendering.
    pub const fn new(
        panel: NodeRef<Nav>,
        toggle: NodeRef<Button>,
        state: WriteSignal<MenuState>,
    ) -> Self {
        Self {
            panel,
            toggle,
            state,
        }
    }

    fn panel(&self) -> Result<HtmlElement> {
        self.panel
            .try_get_untracked()
            .flatten()
            .ok_or(Error::MissingElement("navigation panel"))
    }

    /// Classify a click target relative to the header.
    ///
    /// Returns `None` while the panel is not rendered, in which case the
    /// click is ignored.
    pub fn classify(&self, target: Option<web_sys::EventTarget>) -> Option<ClickOrigin> {
        let panel = self.panel().ok()?;
        let node = target.and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        let Some(node) = node else {
            return Some(ClickOrigin::Outside);
        };

        let on_toggle = self
            .toggle
            .try_get_untracked()
            .flatten()
            .is_some_and(|toggle| toggle.contains(Some(&node)));
        let in_panel = !on_toggle && panel.contains(Some(&node));
        Some(ClickOrigin::from_containment(on_toggle, in_panel))
    }
}

impl MenuHost for WebHost {
    fn expand_panel(&self) -> Result<()> {
        let panel = self.panel()?;
        let height = panel.scroll_height();
        panel
            .style()
            .set_property("max-height", &format!("{height}px"))
            .map_err(dom_error)
    }

    fn collapse_panel(&self) -> Result<()> {
        let panel = self.panel()?;
        panel
            .style()
            .remove_property("max-height")
            .map(|_| ())
            .map_err(dom_error)
    }

    fn set_marker(&self, active: bool) -> Result<()> {
        let body = html_document()?.body().ok_or(Error::MissingElement("body"))?;
        let classes = body.class_list();
        if active {
            classes.add_1(MARKER_CLASS).map_err(dom_error)
        } else {
            classes.remove_1(MARKER_CLASS).map_err(dom_error)
        }
    }

    fn scroll_to(&self, anchor: &str) -> Result<bool> {
        let Some(target) = html_document()?.get_element_by_id(anchor) else {
            return Ok(false);
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(true)
    }

    fn state_changed(&self, state: MenuState) {
        // The signal is already disposed when teardown closes the menu.
        let _ = self.state.try_set(state);
    }
}

/// Document-level listener registration.
#[derive(Clone, Copy)]
pub struct WebDocument {
    host: WebHost,
}

impl WebDocument {
    /// Create a registrar that classifies clicks with `host`.
    pub const fn new(host: WebHost) -> Self {
        Self { host }
    }

    fn listen(
        event: &'static str,
        closure: Closure<dyn FnMut(web_sys::Event)>,
    ) -> Result<Subscription> {
        let document = html_document()?;
        document
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| Error::Listener {
                event,
                message: dom_error(e).to_string(),
            })?;

        Ok(Subscription::new(move || {
            let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
            if let Err(e) = document.remove_event_listener_with_callback(event, callback) {
                leptos::logging::warn!("Failed to remove {} listener: {:?}", event, e);
            }
        }))
    }
}

impl DocumentEvents for WebDocument {
    fn on_key_down(&self, mut handler: KeyHandler) -> Result<Subscription> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                handler(KeyPress::new(event.key(), event.key_code()));
            }
        });
        Self::listen("keydown", closure)
    }

    fn on_click(&self, mut handler: ClickHandler) -> Result<Subscription> {
        let host = self.host;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if let Some(origin) = host.classify(event.target()) {
                handler(origin);
            }
        });
        Self::listen("click", closure)
    }
}

/// Record `#anchor` in the address bar without the browser's jump scroll.
pub fn push_anchor_hash(anchor: &str) {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        return;
    };
    let url = format!("#{anchor}");
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(url.as_str())) {
        leptos::logging::warn!("Failed to update location hash: {:?}", e);
    }
}

/// Read header options embedded in the page as JSON.
///
/// Looks for an element with id `element_id` (typically a
/// `<script type="application/json">`). Missing or invalid options fall back
/// to the defaults.
pub fn options_from_page(element_id: &str) -> HeaderOptions {
    let json = html_document()
        .ok()
        .and_then(|document| document.get_element_by_id(element_id))
        .and_then(|element| element.text_content());
    let Some(json) = json else {
        return HeaderOptions::default();
    };

    match HeaderOptions::from_json(&json) {
        Ok(options) => options,
        Err(e) => {
            leptos::logging::warn!("Ignoring header options in #{}: {}", element_id, e);
            HeaderOptions::default()
        }
    }
}

/// Remove the element with id `element_id`, if the page has one.
pub fn remove_element(element_id: &str) {
    if let Some(element) = html_document()
        .ok()
        .and_then(|document| document.get_element_by_id(element_id))
    {
        element.remove();
    }
}

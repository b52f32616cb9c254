//! Site header component.
//!
//! Renders the logo, the mobile toggle button and the collapsible navigation
//! panel. Menu behavior comes from [`MountedMenu`]; this component only wires
//! it to the DOM and the reactive state.

use leptos::html::{Button, Nav};
use leptos::prelude::*;
use sitenav_core::{
    CALL_TO_ACTION_CLASS, HeaderLayout, HeaderOptions, MenuState, MountedMenu, NavLink, PANEL_ID,
    TOGGLE_LABEL,
};

use crate::components::Logo;
use crate::dom::{WebDocument, WebHost, push_anchor_hash};

/// The mounted menu, owned by one header instance.
type MenuSlot = StoredValue<Option<MountedMenu<WebHost>>, LocalStorage>;

fn with_menu(slot: MenuSlot, f: impl FnOnce(&MountedMenu<WebHost>)) {
    slot.try_with_value(|menu| {
        if let Some(menu) = menu {
            f(menu);
        }
    });
}

/// Responsive site header.
///
/// Attributes set on the component with `attr:` (ids, data attributes, ARIA)
/// are forwarded to the root `<header>` element.
///
/// While mounted, the header listens for `keydown` and `click` on the
/// document to close the mobile panel on Escape or an outside click. Both
/// listeners are removed, and the panel closed, when the header is disposed.
#[component]
pub fn Header(
    /// Display options.
    #[prop(optional)]
    options: HeaderOptions,
) -> impl IntoView {
    let layout = HeaderLayout::from_options(&options);

    let (state, set_state) = signal(MenuState::Closed);
    let panel_ref = NodeRef::<Nav>::new();
    let toggle_ref = NodeRef::<Button>::new();

    let host = WebHost::new(panel_ref, toggle_ref, set_state);
    let mounted = match MountedMenu::mount(host, &WebDocument::new(host)) {
        Ok(menu) => menu,
        Err(e) => {
            leptos::logging::error!("Header listeners unavailable: {}", e);
            MountedMenu::detached(host)
        }
    };
    let menu: MenuSlot = StoredValue::new_local(Some(mounted));

    // Teardown: dropping the menu closes it and removes the listeners.
    on_cleanup(move || {
        menu.try_update_value(Option::take);
    });

    // Keep the open panel sized to its content whenever the state is
    // re-evaluated.
    Effect::new(move || {
        if state.get().is_open() {
            with_menu(menu, MountedMenu::reapply);
        }
    });

    let navigate = move |anchor: &'static str| {
        with_menu(menu, |menu| {
            menu.navigate(anchor);
        });
        push_anchor_hash(anchor);
    };

    let nav_link = move |link: &'static NavLink, class: Option<&'static str>| {
        view! {
            <li>
                <a
                    href=link.href()
                    class=class
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        navigate(link.anchor);
                    }
                >
                    {link.label}
                </a>
            </li>
        }
    };

    let nav_class = move || {
        if state.get().is_open() {
            "header-nav is-active"
        } else {
            "header-nav"
        }
    };

    let nav_links = layout.nav_links();
    let nav_list_class = layout.nav_list_class.clone();
    let call_to_action = layout.call_to_action();
    let nav = layout.show_nav.then(move || {
        view! {
            <button
                node_ref=toggle_ref
                class="header-nav-toggle"
                aria-controls=PANEL_ID
                aria-expanded=move || state.get().is_open().to_string()
                on:click=move |_| with_menu(menu, |menu| {
                    menu.toggle();
                })
            >
                <span class="screen-reader">{TOGGLE_LABEL}</span>
                <span class="hamburger">
                    <span class="hamburger-inner"></span>
                </span>
            </button>
            <nav node_ref=panel_ref id=PANEL_ID class=nav_class>
                <div class="header-nav-inner">
                    <ul class=nav_list_class>
                        {nav_links.iter().map(|link| nav_link(link, None)).collect_view()}
                    </ul>
                    {call_to_action.map(|link| view! {
                        <ul class="list-reset header-nav-right">
                            {nav_link(link, Some(CALL_TO_ACTION_CLASS))}
                        </ul>
                    })}
                </div>
            </nav>
        }
    });

    view! {
        <header class=layout.header_class>
            <div class="container">
                <div class=layout.inner_class>
                    <Logo />
                    {nav}
                </div>
            </div>
        </header>
    }
}

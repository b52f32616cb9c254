//! Landing page shell around the site header.

use leptos::prelude::*;
use sitenav_core::{CALL_TO_ACTION, HeaderOptions, NAV_LINKS};

use crate::components::Header;
use crate::dom::{options_from_page, remove_element};
use crate::theme::{generate_css_variables, header_stylesheet};

/// Id of the optional `<script type="application/json">` holding header options.
pub const OPTIONS_ELEMENT_ID: &str = "sitenav-options";

/// Id of the placeholder shown until the WASM bundle starts.
pub const LOADING_ELEMENT_ID: &str = "loading";

/// Replace the loading placeholder with the landing page.
pub fn launch() {
    remove_element(LOADING_ELEMENT_ID);
    mount_to_body(App);
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let options = options_from_page(OPTIONS_ELEMENT_ID);

    view! {
        <style>{generate_css_variables()}</style>
        <style>{header_stylesheet()}</style>
        <LandingPage options=options />
    }
}

/// The header followed by one section per navigation anchor.
#[component]
pub fn LandingPage(
    /// Header options.
    #[prop(optional)]
    options: HeaderOptions,
) -> impl IntoView {
    let sections = NAV_LINKS
        .into_iter()
        .chain([CALL_TO_ACTION])
        .map(|link| {
            view! {
                <section id=link.anchor class="section">
                    <div class="container">
                        <h2 class="section-title">{link.label}</h2>
                    </div>
                </section>
            }
        })
        .collect_view();

    view! {
        <div class="body-wrap">
            <Header options=options />
            <main class="site-content">{sections}</main>
        </div>
    }
}

//! Logo component.

use leptos::prelude::*;

/// Brand mark linking back to the top of the page.
#[component]
pub fn Logo(
    /// Site name shown next to the mark.
    #[prop(default = "Sitenav".to_string(), into)]
    name: String,
) -> impl IntoView {
    let label = name.clone();
    view! {
        <div class="brand">
            <h1 class="m-0">
                <a href="#home" class="logo" aria-label=label>
                    <span class="logo-mark"></span>
                    <span class="logo-text">{name}</span>
                </a>
            </h1>
        </div>
    }
}

//! Neutral loading indicator.

use leptos::prelude::*;

/// Centered spinner shown while a page or the session is loading.
#[component]
pub fn Spinner(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("spinner {class}") role="status" aria-label="Loading">
            <span class="spinner__ring"></span>
        </div>
    }
}

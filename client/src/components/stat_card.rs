//! Reusable stat card for the overview page.

use leptos::prelude::*;

/// A titled metric with an optional subtitle and accent class.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] subtitle: String,
    #[prop(optional, into)] accent: String,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {accent}")>
            <p class="stat-card__title">{title}</p>
            <p class="stat-card__value">{value}</p>
            {(!subtitle.is_empty()).then(|| view! { <p class="stat-card__subtitle">{subtitle}</p> })}
        </div>
    }
}

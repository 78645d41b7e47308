//! Activity log page: the current user's recent account actions.
//!
//! ERROR HANDLING
//! ==============
//! This is a non-critical read: a failed fetch degrades to an empty list
//! with a console notice rather than an error state.

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

use leptos::prelude::*;

use crate::components::spinner::Spinner;
use crate::net::types::ActivityLogEntry;
use crate::util::format::format_date;

#[cfg(feature = "hydrate")]
const LOG_LIMIT: u64 = 50;

/// Badge class for an action verb; unknown verbs share a neutral badge.
fn action_badge_class(action: &str) -> &'static str {
    match action {
        "CREATE" => "badge badge--create",
        "UPDATE" => "badge badge--update",
        "DELETE" => "badge badge--delete",
        "LOGIN" => "badge badge--login",
        "REGISTER" => "badge badge--register",
        _ => "badge",
    }
}

#[component]
pub fn ActivityPage() -> impl IntoView {
    let logs = RwSignal::new(Vec::<ActivityLogEntry>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let requested = RwSignal::new(false);
        Effect::new(move || {
            if requested.get() {
                return;
            }
            requested.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::activity_logs(LOG_LIMIT).await {
                    Ok(data) => logs.set(data.items),
                    // Degrade to an empty list; the page is informational only.
                    Err(e) => log::warn!("failed to load activity log: {e}"),
                }
                loading.set(false);
            });
        });
    }

    view! {
        <Show when=move || !loading.get() fallback=move || view! { <Spinner class="spinner--page"/> }>
            <div class="page page--activity">
                <header class="page__header">
                    <h2>"Activity Log"</h2>
                    <p class="page__subtitle">"Your recent account activity"</p>
                </header>

                <Show
                    when=move || !logs.get().is_empty()
                    fallback=move || view! { <p class="page__empty">"No activity recorded yet."</p> }
                >
                    <div class="panel activity-list">
                        {move || {
                            logs.get()
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <div class="activity-list__row">
                                            <div class="activity-list__body">
                                                <span class=action_badge_class(&entry.action)>
                                                    {entry.action.clone()}
                                                </span>
                                                <span class="activity-list__resource">
                                                    {entry.resource.clone()}
                                                </span>
                                                {entry
                                                    .resource_id
                                                    .clone()
                                                    .map(|id| {
                                                        view! {
                                                            <span class="activity-list__id">{id}</span>
                                                        }
                                                    })}
                                                {entry
                                                    .details
                                                    .clone()
                                                    .map(|details| {
                                                        view! {
                                                            <p class="activity-list__details">{details}</p>
                                                        }
                                                    })}
                                            </div>
                                            <span class="activity-list__date">
                                                {format_date(&entry.created_at)}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </div>
        </Show>
    }
}

//! Fraud alerts page: transactions flagged by the anomaly model.

#[cfg(test)]
#[path = "fraud_alerts_test.rs"]
mod fraud_alerts_test;

use leptos::prelude::*;

use crate::components::spinner::Spinner;
use crate::net::types::Transaction;
use crate::util::format::{format_currency, format_date};

#[cfg(feature = "hydrate")]
const ALERT_LIMIT: u64 = 50;

/// Fraud score as a display percentage, e.g. `72.4%`.
fn score_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Score bar width, clamped to the meter range.
fn score_bar_width(score: f64) -> f64 {
    (score * 100.0).clamp(0.0, 100.0)
}

#[component]
pub fn FraudAlertsPage() -> impl IntoView {
    let flagged = RwSignal::new(Vec::<Transaction>::new());
    let total = RwSignal::new(0_u64);
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
                match crate::net::api::list_transactions(0, ALERT_LIMIT, None, Some(true)).await {
                    Ok(data) => {
                        flagged.set(data.items);
                        total.set(data.total);
                    }
                    Err(e) => log::warn!("failed to load flagged transactions: {e}"),
                }
                loading.set(false);
            });
        });
    }

    view! {
        <Show when=move || !loading.get() fallback=move || view! { <Spinner class="spinner--page"/> }>
            <div class="page page--fraud">
                <header class="page__header">
                    <h2>"Fraud Alerts"</h2>
                    <p class="page__subtitle">
                        {move || {
                            let count = total.get();
                            let plural = if count == 1 { "" } else { "s" };
                            format!("{count} transaction{plural} flagged by the AI fraud detection model")
                        }}
                    </p>
                </header>

                <div class="notice notice--warning">
                    <p>
                        "Transactions are scored using an Isolation Forest anomaly detection \
                         model. Scores above 65% are automatically flagged. Review each item \
                         to confirm or dismiss."
                    </p>
                </div>

                <Show
                    when=move || !flagged.get().is_empty()
                    fallback=move || {
                        view! {
                            <div class="page__empty page__empty--positive">
                                <h3>"All Clear"</h3>
                                <p>"No suspicious transactions detected."</p>
                            </div>
                        }
                    }
                >
                    <div class="alert-list">
                        {move || {
                            flagged
                                .get()
                                .into_iter()
                                .map(|txn| {
                                    view! {
                                        <div class="alert-card">
                                            <div class="alert-card__body">
                                                <h4>{txn.description.clone()}</h4>
                                                <p class="alert-card__meta">
                                                    <span>{format_date(&txn.created_at)}</span>
                                                    <span class="badge">{txn.category.clone()}</span>
                                                </p>
                                            </div>
                                            <div class="alert-card__score">
                                                <p class="alert-card__amount">
                                                    {format_currency(txn.amount)}
                                                </p>
                                                <span class="alert-card__score-label">
                                                    {format!("Fraud Score: {}", score_percent(txn.fraud_score))}
                                                </span>
                                                <div class="meter__track meter__track--narrow">
                                                    <div
                                                        class="meter__fill meter__fill--danger"
                                                        style=format!(
                                                            "width: {:.1}%;",
                                                            score_bar_width(txn.fraud_score),
                                                        )
                                                    ></div>
                                                </div>
                                            </div>
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

//! Dashboard overview: summary stat cards, prediction banner, and charts.

use leptos::prelude::*;

use crate::components::charts::{CategoryChart, TrendChart};
use crate::components::spinner::Spinner;
use crate::components::stat_card::StatCard;
use crate::net::types::{AnalyticsSummary, PredictionResult};
use crate::util::format::format_currency;

fn flagged_subtitle(count: u64) -> &'static str {
    if count > 0 { "Review required" } else { "All clear" }
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let summary = RwSignal::new(None::<AnalyticsSummary>);
    let prediction = RwSignal::new(None::<PredictionResult>);
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
                match crate::net::api::analytics_summary().await {
                    Ok(data) => summary.set(Some(data)),
                    Err(e) => log::warn!("failed to load analytics summary: {e}"),
                }
                match crate::net::api::predict_spending().await {
                    Ok(data) => prediction.set(Some(data)),
                    Err(e) => log::warn!("failed to load spending prediction: {e}"),
                }
                loading.set(false);
            });
        });
    }

    view! {
        <Show when=move || !loading.get() fallback=move || view! { <Spinner class="spinner--page"/> }>
            <Show
                when=move || summary.get().is_some()
                fallback=move || view! { <p class="page__empty">"Unable to load data."</p> }
            >
                <div class="page page--overview">
                    <header class="page__header">
                        <h2>"Dashboard Overview"</h2>
                        <p class="page__subtitle">"Your financial summary at a glance"</p>
                    </header>

                    {move || {
                        summary
                            .get()
                            .map(|s| {
                                view! {
                                    <div class="stat-grid">
                                        <StatCard
                                            title="Total Spending"
                                            value=format_currency(s.total_spending)
                                            accent="stat-card--indigo"
                                        />
                                        <StatCard
                                            title="This Month"
                                            value=format_currency(s.monthly_spending)
                                            accent="stat-card--green"
                                        />
                                        <StatCard
                                            title="Transactions"
                                            value=s.transaction_count.to_string()
                                            accent="stat-card--blue"
                                        />
                                        <StatCard
                                            title="Fraud Alerts"
                                            value=s.flagged_count.to_string()
                                            subtitle=flagged_subtitle(s.flagged_count)
                                            accent={
                                                if s.flagged_count > 0 {
                                                    "stat-card--red"
                                                } else {
                                                    "stat-card--green"
                                                }
                                            }
                                        />
                                    </div>

                                    <PredictionBanner prediction=prediction.get().unwrap_or_default()/>

                                    <div class="panel-grid">
                                        <section class="panel">
                                            <h3>"Spending by Category"</h3>
                                            <CategoryChart data=s.category_breakdown.clone()/>
                                        </section>
                                        <section class="panel">
                                            <h3>"Monthly Trend"</h3>
                                            <TrendChart data=s.monthly_trend.clone()/>
                                        </section>
                                    </div>
                                }
                            })
                    }}
                </div>
            </Show>
        </Show>
    }
}

/// Gradient banner for the model's next-month spending prediction. Hidden
/// entirely when the model lacks enough history.
#[component]
pub fn PredictionBanner(prediction: PredictionResult) -> impl IntoView {
    prediction.predicted_spending.map(|predicted| {
        view! {
            <div class="prediction-banner">
                <h3>"AI Spending Prediction"</h3>
                <p class="prediction-banner__value">
                    {format_currency(predicted)}
                    <span class="prediction-banner__caption">" predicted next month"</span>
                </p>
                {prediction
                    .confidence
                    .map(|confidence| {
                        view! {
                            <p class="prediction-banner__confidence">
                                {format!("Model confidence: {:.1}%", confidence * 100.0)}
                            </p>
                        }
                    })}
            </div>
        }
    })
}

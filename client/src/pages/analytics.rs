//! Analytics page: charts, prediction with confidence meter, and the
//! category breakdown table.

use leptos::prelude::*;

use crate::components::charts::{CategoryChart, TrendChart, percent_of};
use crate::components::spinner::Spinner;
use crate::net::types::{AnalyticsSummary, PredictionResult};
use crate::util::format::format_currency;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
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
                fallback=move || view! { <p class="page__empty">"Unable to load analytics."</p> }
            >
                <div class="page page--analytics">
                    <header class="page__header">
                        <h2>"Analytics"</h2>
                        <p class="page__subtitle">"Deep dive into your spending patterns"</p>
                    </header>

                    {move || {
                        prediction
                            .get()
                            .and_then(|p| p.predicted_spending.map(|predicted| (p, predicted)))
                            .map(|(p, predicted)| {
                                view! {
                                    <div class="prediction-banner">
                                        <h3>"AI Spending Prediction (Linear Regression)"</h3>
                                        <p class="prediction-banner__value">{format_currency(predicted)}</p>
                                        <p class="prediction-banner__caption">
                                            "Predicted total spending for next month"
                                        </p>
                                        {p.confidence
                                            .map(|confidence| {
                                                let pct = confidence * 100.0;
                                                view! {
                                                    <div class="meter">
                                                        <div class="meter__header">
                                                            <span>"Model Confidence"</span>
                                                            <span>{format!("{pct:.1}%")}</span>
                                                        </div>
                                                        <div class="meter__track">
                                                            <div
                                                                class="meter__fill"
                                                                style=format!("width: {pct:.1}%;")
                                                            ></div>
                                                        </div>
                                                    </div>
                                                }
                                            })}
                                    </div>
                                }
                            })
                    }}

                    {move || {
                        summary
                            .get()
                            .map(|s| {
                                let total = s.total_spending;
                                view! {
                                    <div class="panel-grid">
                                        <section class="panel">
                                            <h3>"Spending by Category"</h3>
                                            <CategoryChart data=s.category_breakdown.clone()/>
                                        </section>
                                        <section class="panel">
                                            <h3>"Monthly Spending Trend"</h3>
                                            <TrendChart data=s.monthly_trend.clone()/>
                                        </section>
                                    </div>

                                    <section class="panel">
                                        <h3>"Category Breakdown"</h3>
                                        <table class="table">
                                            <thead>
                                                <tr>
                                                    <th>"Category"</th>
                                                    <th class="table__num">"Total Spent"</th>
                                                    <th class="table__num">"% of Total"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {{
                                                    let mut rows: Vec<(String, f64)> = s
                                                        .category_breakdown
                                                        .iter()
                                                        .map(|(name, amount)| (name.clone(), *amount))
                                                        .collect();
                                                    rows.sort_by(|a, b| b.1.total_cmp(&a.1));
                                                    rows.into_iter()
                                                        .map(|(name, amount)| {
                                                            view! {
                                                                <tr>
                                                                    <td>{name}</td>
                                                                    <td class="table__num">
                                                                        {format_currency(amount)}
                                                                    </td>
                                                                    <td class="table__num">
                                                                        {percent_of(amount, total)}
                                                                    </td>
                                                                </tr>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()
                                                }}
                                            </tbody>
                                        </table>
                                    </section>
                                }
                            })
                    }}
                </div>
            </Show>
        </Show>
    }
}

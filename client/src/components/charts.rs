//! Dependency-free SVG charts for spending analytics.
//!
//! DESIGN
//! ======
//! Rendering stays deliberately simple (bars and a polyline); the parts
//! worth testing are the pure data-shaping helpers that turn backend
//! aggregates into draw-ready values.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::net::types::MonthlyTrendPoint;
use crate::util::format::{format_currency, trend_label};

const TREND_WIDTH: f64 = 560.0;
const TREND_HEIGHT: f64 = 200.0;

/// Category entries sorted by amount, largest first.
fn category_entries(breakdown: &BTreeMap<String, f64>) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> =
        breakdown.iter().map(|(name, amount)| (name.clone(), *amount)).collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries
}

/// Accent color for a category; unknown categories share a neutral tone.
fn category_color(name: &str) -> &'static str {
    match name {
        "Food & Groceries" => "#f59e0b",
        "Transportation" => "#3b82f6",
        "Entertainment" => "#8b5cf6",
        "Utilities" => "#10b981",
        "Healthcare" => "#ef4444",
        "Shopping" => "#ec4899",
        "Housing" => "#6366f1",
        "Education" => "#14b8a6",
        "Income" => "#22c55e",
        _ => "#94a3b8",
    }
}

/// Bar length as a percentage of the largest entry.
fn bar_width_pct(value: f64, max: f64) -> f64 {
    if max <= 0.0 || value <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).min(100.0)
}

/// Share of `total`, formatted as `12.3%`.
pub fn percent_of(amount: f64, total: f64) -> String {
    if total <= 0.0 {
        return "0.0%".to_owned();
    }
    format!("{:.1}%", amount / total * 100.0)
}

/// Label + total pairs for the trend axis, oldest first.
fn trend_points(trend: &[MonthlyTrendPoint]) -> Vec<(String, f64)> {
    trend.iter().map(|point| (trend_label(point.year, point.month), point.total)).collect()
}

/// SVG `points` attribute for a polyline spanning `width` x `height`,
/// scaled so the largest value touches the top. A single point renders as
/// a flat line across the full width.
#[allow(clippy::cast_precision_loss)]
fn polyline_points(values: &[f64], width: f64, height: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let max = values.iter().copied().fold(0.0_f64, f64::max).max(1.0);
    let step = if values.len() > 1 { width / (values.len() - 1) as f64 } else { width };

    let mut points = Vec::with_capacity(values.len().max(2));
    for (i, value) in values.iter().enumerate() {
        let x = i as f64 * step;
        let y = height - (value / max * height);
        points.push(format!("{x:.1},{y:.1}"));
    }
    if values.len() == 1 {
        let y = height - (values[0] / max * height);
        points.push(format!("{width:.1},{y:.1}"));
    }
    points.join(" ")
}

/// Horizontal-bar breakdown of spending by category.
#[component]
pub fn CategoryChart(data: BTreeMap<String, f64>) -> impl IntoView {
    let entries = category_entries(&data);
    let max = entries.first().map(|(_, amount)| *amount).unwrap_or_default();

    if entries.is_empty() {
        return view! { <p class="chart__empty">"No data available"</p> }.into_any();
    }

    view! {
        <div class="chart chart--category">
            {entries
                .into_iter()
                .map(|(name, amount)| {
                    let width = bar_width_pct(amount, max);
                    let color = category_color(&name);
                    view! {
                        <div class="chart__row">
                            <span class="chart__label">{name}</span>
                            <span class="chart__track">
                                <span
                                    class="chart__bar"
                                    style=format!("width: {width:.1}%; background: {color};")
                                ></span>
                            </span>
                            <span class="chart__amount">{format_currency(amount)}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

/// Monthly spending trend as an SVG polyline with month labels.
#[component]
pub fn TrendChart(data: Vec<MonthlyTrendPoint>) -> impl IntoView {
    let points = trend_points(&data);

    if points.is_empty() {
        return view! { <p class="chart__empty">"No data available"</p> }.into_any();
    }

    let values: Vec<f64> = points.iter().map(|(_, total)| *total).collect();
    let line = polyline_points(&values, TREND_WIDTH, TREND_HEIGHT);

    view! {
        <div class="chart chart--trend">
            <svg
                viewBox=format!("0 0 {TREND_WIDTH} {TREND_HEIGHT}")
                class="chart__svg"
                role="img"
                aria-label="Monthly spending trend"
            >
                <polyline points=line fill="none" stroke="#6366f1" stroke-width="2"></polyline>
            </svg>
            <div class="chart__axis">
                {points
                    .into_iter()
                    .map(|(label, total)| {
                        view! {
                            <span class="chart__tick" title=format_currency(total)>
                                {label}
                            </span>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
    .into_any()
}

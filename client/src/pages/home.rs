//! Public landing page with hero copy and sign-in/sign-up calls to action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;

const FEATURES: [(&str, &str); 4] = [
    ("Expense Tracking", "Full CRUD with automatic AI categorisation."),
    ("AI Categorisation", "TF-IDF + Naive Bayes auto-labels your transactions."),
    ("Fraud Detection", "Isolation Forest flags anomalous transactions instantly."),
    ("Smart Analytics", "Monthly trends, predictions, and category breakdowns."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = Session::expect();
    let navigate = use_navigate();

    // Signed-in visitors land straight on the dashboard.
    Effect::new(move || {
        if session.get().is_authenticated() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    view! {
        <div class="landing">
            <nav class="landing__nav">
                <h1 class="landing__brand">"Expense Sense"</h1>
                <div class="landing__nav-actions">
                    <a class="btn" href="/login">"Sign In"</a>
                    <a class="btn btn--primary" href="/register">"Get Started"</a>
                </div>
            </nav>

            <section class="landing__hero">
                <h2>"Smart Expense Tracking"</h2>
                <p class="landing__tagline">"Powered by AI"</p>
                <p class="landing__copy">
                    "Track your expenses, detect fraud in real-time, predict future \
                     spending, and gain AI-driven insights — all in one dashboard."
                </p>
                <div class="landing__cta">
                    <a class="btn btn--primary" href="/register">"Start Free"</a>
                    <a class="btn" href="/login">"Sign In"</a>
                </div>
            </section>

            <section class="landing__features">
                {FEATURES
                    .into_iter()
                    .map(|(title, desc)| {
                        view! {
                            <div class="landing__feature">
                                <h3>{title}</h3>
                                <p>{desc}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}

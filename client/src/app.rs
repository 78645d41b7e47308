//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::shell::DashboardShell;
use crate::pages::{
    activity::ActivityPage, admin_users::AdminUsersPage, analytics::AnalyticsPage,
    fraud_alerts::FraudAlertsPage, home::HomePage, login::LoginPage, overview::OverviewPage,
    register::RegisterPage, settings::SettingsPage, transactions::TransactionsPage,
};
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context and sets up client-side routing.
/// All `/dashboard` routes are nested under [`DashboardShell`], which is
/// the client-side route guard for the protected area.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Single owner of the auth session; every consumer subscribes via context.
    Session::provide();

    view! {
        <Stylesheet id="leptos" href="/pkg/expense-sense.css"/>
        <Title text="Expense Sense"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardShell>
                    <Route path=StaticSegment("") view=OverviewPage/>
                    <Route path=StaticSegment("transactions") view=TransactionsPage/>
                    <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                    <Route path=StaticSegment("fraud-alerts") view=FraudAlertsPage/>
                    <Route path=StaticSegment("activity") view=ActivityPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=AdminUsersPage
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

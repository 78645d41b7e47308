//! Dashboard shell: sidebar navigation plus the client-side route guard for
//! the protected page group.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted as the parent route of every `/dashboard` page. While the session
//! hydrates it renders a neutral spinner and performs no redirect (prevents
//! a flash of the login redirect before hydration completes); once settled
//! anonymous, it redirects to `/login`. The edge guard upstream is advisory
//! only; this component is the authoritative backstop.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::spinner::Spinner;
use crate::state::session::Session;
use crate::util::guard;

/// One sidebar navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

const NAV_ITEMS: [NavItem; 6] = [
    NavItem { href: "/dashboard", label: "Overview" },
    NavItem { href: "/dashboard/transactions", label: "Transactions" },
    NavItem { href: "/dashboard/analytics", label: "Analytics" },
    NavItem { href: "/dashboard/fraud-alerts", label: "Fraud Alerts" },
    NavItem { href: "/dashboard/activity", label: "Activity Log" },
    NavItem { href: "/dashboard/settings", label: "Settings" },
];

const ADMIN_ITEMS: [NavItem; 1] = [NavItem { href: "/dashboard/admin/users", label: "Manage Users" }];

/// Sidebar entries for a session; admin entries appear only with the admin
/// capability.
fn nav_items(is_admin: bool) -> Vec<NavItem> {
    let mut items = NAV_ITEMS.to_vec();
    if is_admin {
        items.extend(ADMIN_ITEMS);
    }
    items
}

/// Whether a nav entry matches the current path. The overview entry matches
/// exactly so it does not light up for every nested page.
fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/dashboard" {
        pathname == href
    } else {
        pathname.starts_with(href)
    }
}

/// Layout + guard for all protected pages.
#[component]
pub fn DashboardShell() -> impl IntoView {
    let session = Session::expect();
    let location = use_location();

    guard::install_unauth_redirect(session, use_navigate());

    let on_logout = move |_| session.logout();

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard dashboard--loading">
                        <Spinner class="spinner--page"/>
                    </div>
                }
            }
        >
            <div class="dashboard">
                <aside class="sidebar">
                    <h1 class="sidebar__brand">"Expense Sense"</h1>
                    <nav class="sidebar__nav">
                        {move || {
                            let pathname = location.pathname.get();
                            nav_items(session.get().is_admin())
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <a
                                            class="sidebar__link"
                                            class:sidebar__link--active=is_active(&pathname, item.href)
                                            href=item.href
                                        >
                                            {item.label}
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </nav>
                    <div class="sidebar__footer">
                        <span class="sidebar__user">
                            {move || session.get().user().map(|u| u.name.clone()).unwrap_or_default()}
                        </span>
                        <button class="btn sidebar__logout" on:click=on_logout title="Logout">
                            "Logout"
                        </button>
                    </div>
                </aside>
                <main class="dashboard__main">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}

//! Admin user-management page: list users, promote/demote roles.
//!
//! Guarded twice: the sidebar hides the link from non-admins, and this page
//! redirects any non-admin session back to the dashboard.

#[cfg(test)]
#[path = "admin_users_test.rs"]
mod admin_users_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::net::types::{AdminUser, Role};
use crate::state::session::Session;
use crate::util::format::format_date;
use crate::util::guard;

#[cfg(feature = "hydrate")]
const USER_LIMIT: u64 = 100;

/// The role a promote/demote toggle switches to.
#[cfg(any(test, feature = "hydrate"))]
fn toggled_role(current: Role) -> Role {
    match current {
        Role::Admin => Role::User,
        Role::User => Role::Admin,
    }
}

/// Optimistically apply a confirmed role change to the loaded rows.
#[cfg(any(test, feature = "hydrate"))]
fn apply_role_change(users: &mut [AdminUser], user_id: &str, role: Role) {
    if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
        user.role = role;
    }
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let session = Session::expect();
    let users = RwSignal::new(Vec::<AdminUser>::new());
    let loading = RwSignal::new(true);

    guard::install_admin_redirect(session, use_navigate());

    #[cfg(feature = "hydrate")]
    {
        let requested = RwSignal::new(false);
        Effect::new(move || {
            if requested.get() {
                return;
            }
            // Wait for the session to settle; the fetch is admin-only.
            if !session.get().is_admin() {
                return;
            }
            requested.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::admin_users(USER_LIMIT).await {
                    Ok(data) => users.set(data.items),
                    Err(e) => log::warn!("failed to load users: {e}"),
                }
                loading.set(false);
            });
        });
    }

    let on_toggle_role = move |user_id: String, current: Role| {
        #[cfg(feature = "hydrate")]
        {
            let next = toggled_role(current);
            leptos::task::spawn_local(async move {
                match crate::net::api::set_user_role(&user_id, next).await {
                    Ok(()) => users.update(|rows| apply_role_change(rows, &user_id, next)),
                    Err(e) => log::warn!("failed to update role: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, current);
        }
    };

    view! {
        <Show when=move || !loading.get() fallback=move || view! { <Spinner class="spinner--page"/> }>
            <div class="page page--admin">
                <header class="page__header">
                    <h2>"Manage Users"</h2>
                    <p class="page__subtitle">
                        {move || format!("{} registered users", users.get().len())}
                    </p>
                </header>

                <div class="panel panel--table">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th>"Joined"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                users
                                    .get()
                                    .into_iter()
                                    .map(|user| {
                                        let toggle_id = user.id.clone();
                                        let role = user.role;
                                        view! {
                                            <tr>
                                                <td>{user.name.clone()}</td>
                                                <td>{user.email.clone()}</td>
                                                <td>
                                                    <span
                                                        class="badge"
                                                        class:badge--admin=role == Role::Admin
                                                    >
                                                        {role.as_str()}
                                                    </span>
                                                </td>
                                                <td>{format_date(&user.created_at)}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--small"
                                                        title=if role == Role::Admin {
                                                            "Demote to user"
                                                        } else {
                                                            "Promote to admin"
                                                        }
                                                        on:click=move |_| on_toggle_role(
                                                            toggle_id.clone(),
                                                            role,
                                                        )
                                                    >
                                                        {if role == Role::Admin { "Demote" } else { "Promote" }}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </Show>
    }
}

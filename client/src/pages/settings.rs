//! Settings page: profile update, password change, account details.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::net::types::ProfileUpdate;
use crate::state::session::Session;
use crate::util::format::format_date;

const MIN_PASSWORD_LEN: usize = 8;

/// Pre-condition check for the profile form; the controller does not
/// re-validate.
fn validate_profile_input(name: &str, email: &str) -> Result<ProfileUpdate, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err("Name and email are required.");
    }
    Ok(ProfileUpdate {
        name: Some(name.to_owned()),
        email: Some(email.to_owned()),
        password: None,
    })
}

fn validate_new_password(password: &str) -> Result<ProfileUpdate, &'static str> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters");
    }
    Ok(ProfileUpdate { password: Some(password.to_owned()), ..ProfileUpdate::default() })
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = Session::expect();
    let current = session.get_untracked();
    let profile = current.user().cloned();

    let name = RwSignal::new(profile.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let email = RwSignal::new(profile.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let new_password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let on_save_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let update = match validate_profile_input(&name.get(), &email.get()) {
            Ok(update) => update,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        saving.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match session.update_profile(&update).await {
                Ok(()) => info.set("Profile updated".to_owned()),
                Err(e) => info.set(format!("Update failed: {e}")),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, update);
        }
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let update = match validate_new_password(&new_password.get()) {
            Ok(update) => update,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        saving.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match session.update_profile(&update).await {
                Ok(()) => {
                    new_password.set(String::new());
                    info.set("Password changed".to_owned());
                }
                Err(e) => info.set(format!("Password change failed: {e}")),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, update);
        }
    };

    view! {
        <div class="page page--settings">
            <header class="page__header">
                <h2>"Settings"</h2>
                <p class="page__subtitle">"Manage your account settings"</p>
            </header>

            <Show when=move || !info.get().is_empty()>
                <p class="notice">{move || info.get()}</p>
            </Show>

            <section class="panel">
                <h3>"Account Information"</h3>
                <p class="panel__caption">"Update your name and email address"</p>
                <form class="settings-form" on:submit=on_save_profile>
                    <label class="settings-form__label">
                        "Full Name"
                        <input
                            class="settings-form__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="settings-form__label">
                        "Email"
                        <input
                            class="settings-form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving…" } else { "Save Changes" }}
                    </button>
                </form>
            </section>

            <section class="panel">
                <h3>"Change Password"</h3>
                <p class="panel__caption">"Ensure your account stays secure"</p>
                <form class="settings-form" on:submit=on_change_password>
                    <label class="settings-form__label">
                        "New Password"
                        <input
                            class="settings-form__input"
                            type="password"
                            placeholder="Min 8 characters"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Updating…" } else { "Update Password" }}
                    </button>
                </form>
            </section>

            <section class="panel">
                <h3>"Account Details"</h3>
                <dl class="details">
                    <div class="details__row">
                        <dt>"User ID"</dt>
                        <dd class="details__mono">
                            {move || session.get().user().map(|u| u.id.clone()).unwrap_or_default()}
                        </dd>
                    </div>
                    <div class="details__row">
                        <dt>"Role"</dt>
                        <dd>
                            {move || {
                                session
                                    .get()
                                    .role()
                                    .map(|role| role.as_str().to_owned())
                                    .unwrap_or_default()
                            }}
                        </dd>
                    </div>
                    <div class="details__row">
                        <dt>"Member Since"</dt>
                        <dd>
                            {move || {
                                session
                                    .get()
                                    .user()
                                    .map(|u| format_date(&u.created_at))
                                    .unwrap_or_else(|| "—".to_owned())
                            }}
                        </dd>
                    </div>
                </dl>
            </section>
        </div>
    }
}

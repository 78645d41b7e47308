//! Auth-session state machine and controller for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the single owner of authentication state: route guards and
//! user-aware components subscribe to it through context, and it is the only
//! writer to the persisted session store (the REST wrapper's emergency clear
//! on a stale credential being the one exception).
//!
//! States: `Hydrating -> { Authenticated, Anonymous }`. Nothing leaves
//! `Hydrating` except to one of the two settled states, and the
//! authenticated variant structurally carries both token and profile, so a
//! partial session is unrepresentable.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{ProfileUpdate, Role, User};
use crate::util::nav;
use crate::util::session_store::{BrowserStore, SessionStore as _};

/// Authentication lifecycle state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// Persisted store not yet consulted; render neutral loading UI.
    #[default]
    Hydrating,
    /// A credential and profile are present and assumed valid.
    Authenticated { token: String, user: User },
    /// No session; protected routes redirect to `/login`.
    Anonymous,
}

impl SessionState {
    pub fn is_hydrating(&self) -> bool {
        matches!(self, Self::Hydrating)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    /// Capability check performed at session-settle time.
    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| user.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }
}

/// Resolve a loaded store record into a settled state: authenticated iff
/// both fields were present at hydration time.
pub fn settle(token: Option<String>, user: Option<User>) -> SessionState {
    match (token, user) {
        (Some(token), Some(user)) => SessionState::Authenticated { token, user },
        _ => SessionState::Anonymous,
    }
}

/// Merge submitted profile fields into the current profile, leaving
/// identity, role, and timestamps untouched.
pub fn apply_profile_update(user: &User, update: &ProfileUpdate) -> User {
    let mut merged = user.clone();
    if let Some(name) = &update.name {
        merged.name = name.clone();
    }
    if let Some(email) = &update.email {
        merged.email = email.clone();
    }
    merged
}

/// Shared handle over the session signal, provided via context at the app
/// root. `Copy` so event handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    /// Create the session, provide it as context, and schedule hydration
    /// from the persisted store. Effects never run during SSR, so the
    /// server renders the neutral `Hydrating` state and the browser settles
    /// it immediately after mount.
    pub fn provide() -> Self {
        let state = RwSignal::new(SessionState::Hydrating);
        let session = Self { state };
        provide_context(session);

        Effect::new(move || {
            let (token, user) = BrowserStore.load();
            state.set(settle(token, user));
        });

        session
    }

    /// The session provided at the app root.
    ///
    /// # Panics
    ///
    /// Panics if called outside the app component tree.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Reactive read; view code re-runs on state transitions.
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    pub fn get_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Exchange credentials for a session, persist it (store + cookie), and
    /// enter the protected area.
    ///
    /// # Errors
    ///
    /// [`api::ApiError::Auth`] on credential rejection; the state is left
    /// unchanged for the form to retry.
    #[cfg(feature = "hydrate")]
    pub async fn login(self, email: &str, password: &str) -> Result<(), crate::net::api::ApiError> {
        let payload = api::login(email, password).await?;
        BrowserStore.save(&payload.access_token, &payload.user);
        self.state.set(SessionState::Authenticated {
            token: payload.access_token,
            user: payload.user,
        });
        nav::force_navigate("/dashboard");
        Ok(())
    }

    /// Create an account; same success/failure contract as [`Self::login`].
    /// Input validation (password length, required fields) is the calling
    /// form's pre-condition.
    ///
    /// # Errors
    ///
    /// [`api::ApiError::Auth`] on rejection (e.g. duplicate email).
    #[cfg(feature = "hydrate")]
    pub async fn register(
        self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), crate::net::api::ApiError> {
        let payload = api::register(name, email, password).await?;
        BrowserStore.save(&payload.access_token, &payload.user);
        self.state.set(SessionState::Authenticated {
            token: payload.access_token,
            user: payload.user,
        });
        nav::force_navigate("/dashboard");
        Ok(())
    }

    /// Clear the persisted record (cookie included), settle to `Anonymous`,
    /// and return to the login entry point. Purely local and idempotent; no
    /// network round-trip.
    pub fn logout(self) {
        BrowserStore.clear();
        self.state.set(SessionState::Anonymous);
        nav::force_navigate("/login");
    }

    /// Push profile edits to the backend, then merge them into both the
    /// in-memory profile and the persisted copy. The token and the
    /// authenticated phase are untouched.
    ///
    /// # Errors
    ///
    /// Any [`api::ApiError`] from the update call; nothing is merged on
    /// failure.
    #[cfg(feature = "hydrate")]
    pub async fn update_profile(
        self,
        update: &ProfileUpdate,
    ) -> Result<(), crate::net::api::ApiError> {
        api::update_profile(update).await?;
        if let SessionState::Authenticated { token, user } = self.state.get_untracked() {
            let merged = apply_profile_update(&user, update);
            BrowserStore.save(&token, &merged);
            self.state.set(SessionState::Authenticated { token, user: merged });
        }
        Ok(())
    }
}

//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical gate and landing-redirect behavior:
//! the route guard decides between placeholder, content, and redirect, and
//! the role router sends a known role to its landing route.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::{Role, StoredUser};
use crate::state::auth::AuthState;
use crate::util::storage;

/// Outcome of a route guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteGate {
    /// Auth status is still being determined: render a placeholder.
    Loading,
    /// Render the nested routes.
    Allow,
    /// Not signed in: go to `/login`.
    RedirectLogin,
    /// Signed in with a role this section does not admit: go to `/`.
    RedirectHome,
}

/// Three-state gate on an externally supplied authentication flag.
/// Loading wins over everything else.
#[must_use]
pub fn resolve_gate(is_loading: bool, is_authenticated: bool) -> RouteGate {
    if is_loading {
        RouteGate::Loading
    } else if is_authenticated {
        RouteGate::Allow
    } else {
        RouteGate::RedirectLogin
    }
}

/// Gate plus a role check. An empty `allowed` list admits any signed-in user.
#[must_use]
pub fn resolve_role_gate(state: &AuthState, allowed: &[Role]) -> RouteGate {
    match resolve_gate(state.loading, state.is_authenticated()) {
        RouteGate::Allow if !allowed.is_empty() => match state.role() {
            Some(role) if allowed.contains(&role) => RouteGate::Allow,
            _ => RouteGate::RedirectHome,
        },
        gate => gate,
    }
}

/// Landing route for a stored user. Unknown roles and no user mean "stay".
#[must_use]
pub fn landing_path(user: Option<&StoredUser>) -> Option<&'static str> {
    user.and_then(StoredUser::role).map(Role::landing_path)
}

/// Landing route for the role-selection screen.
///
/// The signed-in user wins; otherwise the raw stored `user` JSON decides on
/// its own. The access token plays no part here, only in the route guard.
#[must_use]
pub fn landing_target(signed_in: Option<&StoredUser>, stored_user_raw: Option<&str>) -> Option<&'static str> {
    landing_path(signed_in).or_else(|| {
        let stored = stored_user_raw.and_then(storage::parse_stored_user);
        landing_path(stored.as_ref())
    })
}

/// Navigate to the user's landing route once auth has loaded and a stored
/// user with a known role exists.
pub fn install_landing_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let stored_raw = storage::read_item(storage::USER_KEY);
        if let Some(path) = landing_target(state.user.as_ref(), stored_raw.as_deref()) {
            navigate(path, NavigateOptions::default());
        }
    });
}

/// Route logout lands on.
pub const LOGOUT_PATH: &str = "/";

/// Forget the stored session and return where to go next.
///
/// The auth signal is left alone: clearing it while a guarded section is
/// still mounted would make the guard redirect to `/login` first. Callers
/// follow up with a full page load, which restores an empty session.
pub fn sign_out() -> &'static str {
    storage::clear_session();
    LOGOUT_PATH
}

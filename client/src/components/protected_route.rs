//! Route guard wrapping each role section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits between the router and a section layout. While the session is
//! being restored it renders a placeholder; afterwards it either renders
//! the section or redirects.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::{RouteGate, resolve_role_gate};

/// Render `children` only for a signed-in user whose role is in `allowed`.
///
/// An empty `allowed` list admits any signed-in user. Anonymous visitors go
/// to `/login`; signed-in users with another role go to `/`.
#[component]
pub fn ProtectedRoute(#[prop(optional)] allowed: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let allowed = StoredValue::new(allowed);

    move || {
        let gate = allowed.with_value(|roles| resolve_role_gate(&auth.get(), roles));
        match gate {
            RouteGate::Loading => view! { <div class="route-loading">"Loading..."</div> }.into_any(),
            RouteGate::Allow => children().into_any(),
            RouteGate::RedirectLogin => view! { <Redirect path="/login"/> }.into_any(),
            RouteGate::RedirectHome => view! { <Redirect path="/"/> }.into_any(),
        }
    }
}

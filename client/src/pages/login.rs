//! Email + password login against the demo accounts.
//!
//! The target role comes from the `role` query parameter, falling back to
//! the role stored by the role-selection screen. A successful sign-in stores
//! the session and navigates to the account's landing route.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::APP_NAME;
use crate::net::types::Role;
use crate::state::auth::{AuthState, authenticate};
use crate::util::storage;

const MISSING_FIELDS: &str = "Please enter both email and password";

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Role the login form is for: a non-empty query value wins over storage.
fn target_role(query: Option<String>, stored: Option<String>) -> Option<String> {
    query.filter(|r| !r.is_empty()).or(stored).filter(|r| !r.is_empty())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let selected_role = move || target_role(query.with(|q| q.get("role")), storage::read_selected_role());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        let role = selected_role();
        match authenticate(&email_value, &password_value, role.as_deref()) {
            Ok(session) => {
                error.set(None);
                storage::save_session(&session.token, &session.user);
                let landing = session.user.role().map_or("/", Role::landing_path);
                log::info!("signed in as {}", session.user.email);
                auth.set(AuthState { user: Some(session.user), loading: false });
                navigate(landing, NavigateOptions::default());
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    let heading = move || {
        selected_role()
            .and_then(|r| Role::parse(&r))
            .map_or_else(|| "Sign in".to_owned(), |r| format!("{} sign in", r.label()))
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{APP_NAME}</h1>
                <p class="login-card__subtitle">{heading}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <a class="login-card__back" href="/">
                    "Choose a different role"
                </a>
            </div>
        </div>
    }
}

//! Landing screen: pick a role, or jump straight to a known session's section.

#[cfg(test)]
#[path = "role_selection_test.rs"]
mod role_selection_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::APP_NAME;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::install_landing_redirect;
use crate::util::storage;

/// One-line summary shown under each role on the landing screen.
#[must_use]
pub fn role_description(role: Role) -> &'static str {
    match role {
        Role::Admin => "System administrator with full access to manage users, departments, and system settings.",
        Role::Lecturer => "Department staff member who can manage department-specific issues and student accounts.",
        Role::Student => "Student who can submit and track their academic support issues.",
    }
}

/// Login route carrying the chosen role.
#[must_use]
pub fn login_path(role: Role) -> String {
    format!("/login?role={}", role.as_str())
}

#[component]
pub fn RoleSelectionPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_landing_redirect(auth, navigate.clone());

    view! {
        <div class="role-selection">
            <h1>{APP_NAME}</h1>
            <p class="role-selection__subtitle">"Select your role to continue"</p>
            <div class="role-selection__grid">
                {Role::ALL
                    .into_iter()
                    .map(|role| {
                        let navigate = navigate.clone();
                        let on_pick = move |_| {
                            storage::save_selected_role(role.as_str());
                            navigate(&login_path(role), NavigateOptions::default());
                        };
                        view! {
                            <button class="role-card" on:click=on_pick>
                                <span class="role-card__title">{role.label()}</span>
                                <span class="role-card__description">{role_description(role)}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

//! Section navigation and sign-out for the role layouts.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use crate::config::APP_NAME;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::sign_out;
use crate::util::format::initials;

/// A sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

/// Sidebar entries for a role's section.
#[must_use]
pub fn nav_links(role: Role) -> Vec<NavLink> {
    let base = role.landing_path();
    let link = |label, suffix: &str| NavLink { label, href: format!("{base}{suffix}") };
    let mut links = vec![link("Dashboard", ""), link("Issues", "/issues")];
    match role {
        Role::Admin => links.push(link("Departments", "/departments")),
        Role::Lecturer | Role::Student => {
            links.push(link("Messages", "/messages"));
            links.push(link("Notifications", "/notifications"));
        }
    }
    links
}

#[component]
pub fn Sidebar(role: Role) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        let path = sign_out();
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    };

    let user_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();
    let user_initials = move || auth.get().user.map(|u| initials(&u.name, 2)).unwrap_or_default();
    let department = move || auth.get().user.map(|u| u.department).unwrap_or_default();

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">{APP_NAME}</div>
            <div class="sidebar__role">{role.label()}</div>
            <ul class="sidebar__links">
                {nav_links(role)
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li>
                                <A href=link.href attr:class="sidebar__link">
                                    {link.label}
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="sidebar__footer">
                <span class="sidebar__avatar">{user_initials}</span>
                <span class="sidebar__user">{user_name}</span>
                <span class="sidebar__department">{department}</span>
                <button class="sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}

/// Sidebar plus the matched child route.
#[component]
pub fn SectionLayout(role: Role) -> impl IntoView {
    view! {
        <div class="portal">
            <Sidebar role=role/>
            <main class="portal__content">
                <Outlet/>
            </main>
        </div>
    }
}

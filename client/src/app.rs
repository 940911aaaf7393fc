//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::components::sidebar::SectionLayout;
use crate::config::APP_NAME;
use crate::net::types::Role;
use crate::pages::{
    dashboard::{AdminDashboard, LecturerDashboard, StudentDashboard},
    departments::DepartmentsPage,
    issue_detail::IssueDetailPage,
    issue_list::IssueListPage,
    login::LoginPage,
    messages::MessagesPage,
    not_found::NotFoundPage,
    notifications::NotificationsPage,
    role_selection::RoleSelectionPage,
};
use crate::state::auth::AuthState;

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
/// Provides the auth context and sets up client-side routing. The session
/// is restored from storage after mount, so the first render (server and
/// hydration alike) sees a loading auth state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);
    Effect::new(move || auth.set(AuthState::restore()));

    view! {
        <Stylesheet id="leptos" href="/pkg/aits.css"/>
        <Title text=APP_NAME/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=RoleSelectionPage/>
                <Route path=StaticSegment("login") view=LoginPage/>

                <ParentRoute path=StaticSegment("admin") view=|| section(Role::Admin)>
                    <Route path=StaticSegment("") view=AdminDashboard/>
                    <Route path=StaticSegment("issues") view=|| view! { <IssueListPage role=Role::Admin/> }/>
                    <Route
                        path=(StaticSegment("issues"), ParamSegment("id"))
                        view=|| view! { <IssueDetailPage role=Role::Admin/> }
                    />
                    <Route path=StaticSegment("departments") view=DepartmentsPage/>
                </ParentRoute>

                <ParentRoute path=StaticSegment("lecturer") view=|| section(Role::Lecturer)>
                    <Route path=StaticSegment("") view=LecturerDashboard/>
                    <Route path=StaticSegment("issues") view=|| view! { <IssueListPage role=Role::Lecturer/> }/>
                    <Route
                        path=(StaticSegment("issues"), ParamSegment("id"))
                        view=|| view! { <IssueDetailPage role=Role::Lecturer/> }
                    />
                    <Route path=StaticSegment("messages") view=MessagesPage/>
                    <Route path=StaticSegment("notifications") view=NotificationsPage/>
                </ParentRoute>

                <ParentRoute path=StaticSegment("student") view=|| section(Role::Student)>
                    <Route path=StaticSegment("") view=StudentDashboard/>
                    <Route path=StaticSegment("issues") view=|| view! { <IssueListPage role=Role::Student/> }/>
                    <Route
                        path=(StaticSegment("issues"), ParamSegment("id"))
                        view=|| view! { <IssueDetailPage role=Role::Student/> }
                    />
                    <Route path=StaticSegment("messages") view=MessagesPage/>
                    <Route path=StaticSegment("notifications") view=NotificationsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Guarded layout for one role's section.
fn section(role: Role) -> impl IntoView {
    view! {
        <ProtectedRoute allowed=vec![role]>
            <SectionLayout role=role/>
        </ProtectedRoute>
    }
}

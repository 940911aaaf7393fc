//! Role dashboards.
//!
//! DESIGN
//! ======
//! Admin figures are fixed placeholders. Lecturer and student dashboards
//! load the ticket list and summarize the slice that belongs to the
//! signed-in user.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::bar_chart::BarChart;
use crate::components::issue_table::IssueTable;
use crate::components::stat_card::{CountTile, StatCard};
use crate::net::types::Role;
use crate::pages::issue_list::load_issues;
use crate::state::auth::AuthState;
use crate::state::dashboard::{admin_cards, lecturer_summary, student_summary, user_growth};
use crate::state::issues::{IssueListState, issues_path};

const RECENT_LIMIT: usize = 5;

fn signed_in_id(auth: RwSignal<AuthState>) -> String {
    auth.with(|a| a.user.as_ref().map(|u| u.id.clone()).unwrap_or_default())
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <div class="dashboard">
            <header class="page-header">
                <h2>"Admin Dashboard"</h2>
            </header>
            <div class="dashboard__cards">
                {admin_cards().into_iter().map(|stat| view! { <StatCard stat=stat/> }).collect_view()}
            </div>
            <BarChart title="User Growth" points=Signal::derive(user_growth)/>
        </div>
    }
}

#[component]
pub fn LecturerDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(IssueListState::loading());
    Effect::new(move || load_issues(state));

    let summary = Memo::new(move |_| state.with(|s| lecturer_summary(&s.items, &signed_in_id(auth))));

    view! {
        <div class="dashboard">
            <header class="page-header">
                <h2>"Lecturer Dashboard"</h2>
                <A href=issues_path(Role::Lecturer)>"All issues"</A>
            </header>
            <div class="dashboard__cards">
                <CountTile label="Assigned" count=Signal::derive(move || summary.with(|s| s.assigned))/>
                <CountTile label="Open" count=Signal::derive(move || summary.with(|s| s.open))/>
                <CountTile label="Resolved" count=Signal::derive(move || summary.with(|s| s.resolved))/>
            </div>
            <section class="dashboard__section">
                <h3>"High priority"</h3>
                <IssueTable role=Role::Lecturer tickets=Signal::derive(move || summary.with(|s| s.urgent.clone()))/>
            </section>
            <BarChart title="Issues by category" points=Signal::derive(move || summary.with(|s| s.by_category.clone()))/>
        </div>
    }
}

#[component]
pub fn StudentDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(IssueListState::loading());
    Effect::new(move || load_issues(state));

    let summary = Memo::new(move |_| state.with(|s| student_summary(&s.items, &signed_in_id(auth), RECENT_LIMIT)));

    view! {
        <div class="dashboard">
            <header class="page-header">
                <h2>"Student Dashboard"</h2>
                <A href=issues_path(Role::Student)>"My issues"</A>
            </header>
            <div class="dashboard__cards">
                <CountTile label="Total" count=Signal::derive(move || summary.with(|s| s.total))/>
                <CountTile label="Open" count=Signal::derive(move || summary.with(|s| s.open))/>
                <CountTile label="In progress" count=Signal::derive(move || summary.with(|s| s.in_progress))/>
                <CountTile label="Resolved" count=Signal::derive(move || summary.with(|s| s.resolved))/>
            </div>
            <section class="dashboard__section">
                <h3>"Recent issues"</h3>
                <IssueTable role=Role::Student tickets=Signal::derive(move || summary.with(|s| s.recent.clone()))/>
            </section>
        </div>
    }
}

//! Single-issue view with status updates, comments, and attachments.

use chrono::Utc;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::attachments::AttachmentsPanel;
use crate::components::badges::{PriorityIndicator, StatusBadge};
use crate::components::comments::CommentsPanel;
use crate::net::tickets::update_ticket;
use crate::net::types::{Role, Ticket, TicketPatch, TicketStatus};
use crate::pages::issue_list::load_issues;
use crate::state::issues::{IssueListState, issues_path};
use crate::util::format::{format_iso, format_relative};

#[component]
pub fn IssueDetailPage(role: Role) -> impl IntoView {
    let params = use_params_map();
    let state = RwSignal::new(IssueListState::loading());

    Effect::new(move || load_issues(state));

    let issue_id = move || params.with(|p| p.get("id")).unwrap_or_default();
    let ticket = move || state.with(|s| s.find(&issue_id()).cloned());

    view! {
        <div class="issue-detail">
            <A href=issues_path(role) attr:class="issue-detail__back">
                "Back to issues"
            </A>
            {move || {
                if state.with(|s| s.loading) {
                    return view! { <p>"Loading..."</p> }.into_any();
                }
                match ticket() {
                    None => view! { <p class="issue-detail__missing">"Issue not found"</p> }.into_any(),
                    Some(ticket) => view! { <IssueSummary ticket=ticket state=state/> }.into_any(),
                }
            }}
            <Show when=move || !state.with(|s| s.loading) && ticket().is_some()>
                <CommentsPanel/>
                <AttachmentsPanel/>
            </Show>
        </div>
    }
}

#[component]
fn IssueSummary(ticket: Ticket, state: RwSignal<IssueListState>) -> impl IntoView {
    let now = Utc::now();
    let current = ticket.status;
    let id = ticket.id.clone();

    let on_status = move |ev: leptos::ev::Event| {
        let Some(status) = TicketStatus::parse(&event_target_value(&ev)) else {
            return;
        };
        let id = id.clone();
        leptos::task::spawn_local(async move {
            let patch = TicketPatch { status: Some(status), ..TicketPatch::default() };
            match update_ticket(&id, patch).await {
                Ok(update) => state.update(|s| s.apply_update(&update)),
                Err(e) => log::error!("ticket update failed: {e}"),
            }
        });
    };

    view! {
        <header class="page-header">
            <h2>{ticket.title.clone()}</h2>
            <span class="issue-detail__id">{ticket.id.clone()}</span>
        </header>
        <div class="issue-detail__chips">
            <StatusBadge status=ticket.status/>
            <PriorityIndicator priority=ticket.priority/>
            <span class="issue-detail__category">{ticket.category.clone()}</span>
        </div>
        <p class="issue-detail__description">{ticket.description.clone()}</p>
        <dl class="issue-detail__meta">
            <dt>"Reported by"</dt>
            <dd>{ticket.student.name.clone()}</dd>
            <dt>"Assigned to"</dt>
            <dd>{ticket.assigned_to.as_ref().map_or_else(|| "Unassigned".to_owned(), |p| p.name.clone())}</dd>
            <dt>"Created"</dt>
            <dd title=format_iso(ticket.created_at, true)>{format_relative(ticket.created_at, now)}</dd>
            <dt>"Updated"</dt>
            <dd title=format_iso(ticket.updated_at, true)>{format_relative(ticket.updated_at, now)}</dd>
        </dl>
        <label class="issue-detail__status">
            "Status "
            <select on:change=on_status>
                {TicketStatus::SELECTABLE
                    .into_iter()
                    .map(|s| view! { <option value=s.as_str() selected={s == current}>{s.label()}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

//! Ticket table used by the issue list and dashboards.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::badges::{PriorityIndicator, StatusBadge};
use crate::net::types::{Role, Ticket};
use crate::state::issues::issue_path;
use crate::util::format::{format_date, truncate};

const TITLE_MAX_CHARS: usize = 48;

#[component]
pub fn IssueTable(role: Role, #[prop(into)] tickets: Signal<Vec<Ticket>>) -> impl IntoView {
    view! {
        <table class="issue-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Title"</th>
                    <th>"Status"</th>
                    <th>"Priority"</th>
                    <th>"Category"</th>
                    <th>"Created"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || tickets.get()
                    key=|ticket| (ticket.id.clone(), ticket.updated_at)
                    children=move |ticket| {
                        view! {
                            <tr class="issue-table__row">
                                <td>
                                    <A href=issue_path(role, &ticket.id)>{ticket.id.clone()}</A>
                                </td>
                                <td title=ticket.title.clone()>{truncate(&ticket.title, TITLE_MAX_CHARS, "...")}</td>
                                <td>
                                    <StatusBadge status=ticket.status/>
                                </td>
                                <td>
                                    <PriorityIndicator priority=ticket.priority/>
                                </td>
                                <td>{ticket.category.clone()}</td>
                                <td>{format_date(ticket.created_at, false)}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
        <Show when=move || tickets.get().is_empty()>
            <p class="issue-table__empty">"No issues found."</p>
        </Show>
    }
}

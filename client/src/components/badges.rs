//! Status and priority chips.

use leptos::prelude::*;

use crate::net::types::{Priority, TicketStatus};
use crate::util::format::{priority_class, status_class};

#[component]
pub fn StatusBadge(status: TicketStatus) -> impl IntoView {
    view! { <span class=format!("badge {}", status_class(status.as_str()))>{status.label()}</span> }
}

#[component]
pub fn PriorityIndicator(priority: Priority) -> impl IntoView {
    view! {
        <span class=format!("priority {}", priority_class(priority.as_str()))>
            <span class="priority__dot" aria-hidden="true"></span>
            {priority.label()}
        </span>
    }
}

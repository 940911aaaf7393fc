//! Issue list: create form, status filter, search, and paging.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each role section mounts this page under `<role>/issues`. Tickets are
//! loaded from the mock service once per mount and live only in this
//! page's state.

use leptos::prelude::*;

use crate::components::issue_table::IssueTable;
use crate::net::tickets::{create_ticket, list_tickets};
use crate::net::types::{Person, Priority, Role, TicketFilters, TicketStatus};
use crate::state::auth::AuthState;
use crate::state::issues::{CATEGORIES, DEFAULT_CATEGORY, IssueListState};

/// Load the full ticket list into `state`.
pub(crate) fn load_issues(state: RwSignal<IssueListState>) {
    leptos::task::spawn_local(async move {
        match list_tickets(&TicketFilters::default()).await {
            Ok(tickets) => state.update(|s| s.set_loaded(tickets)),
            Err(e) => {
                log::error!("ticket list failed: {e}");
                state.update(|s| s.set_failed(e));
            }
        }
    });
}

/// Reporter recorded on tickets created by the signed-in user.
pub(crate) fn current_person(auth: RwSignal<AuthState>) -> Person {
    auth.get_untracked()
        .user
        .map_or_else(|| Person { id: String::new(), name: "Anonymous".to_owned(), avatar: None }, |u| u.as_person())
}

#[component]
pub fn IssueListPage(role: Role) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(IssueListState::loading());

    Effect::new(move || load_issues(state));

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut draft = None;
        state.update(|s| draft = s.take_draft(current_person(auth)));
        let Some(draft) = draft else {
            return;
        };
        leptos::task::spawn_local(async move {
            match create_ticket(draft).await {
                Ok(ticket) => state.update(|s| s.push_created(ticket)),
                Err(e) => log::error!("ticket create failed: {e}"),
            }
        });
    };

    let on_status = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.set_status_filter(TicketStatus::parse(&value)));
    };

    let visible = Signal::derive(move || state.with(IssueListState::visible));

    view! {
        <div class="issue-list">
            <header class="page-header">
                <h2>"Issues"</h2>
            </header>
            <form class="issue-form" on:submit=on_create>
                <input
                    class="issue-form__title"
                    type="text"
                    placeholder="Issue title"
                    prop:value=move || state.with(|s| s.title.clone())
                    on:input=move |ev| state.update(|s| s.title = event_target_value(&ev))
                />
                <textarea
                    class="issue-form__description"
                    placeholder="Describe the issue"
                    prop:value=move || state.with(|s| s.description.clone())
                    on:input=move |ev| state.update(|s| s.description = event_target_value(&ev))
                ></textarea>
                <select
                    class="issue-form__category"
                    on:change=move |ev| state.update(|s| s.category = event_target_value(&ev))
                >
                    {CATEGORIES
                        .into_iter()
                        .map(|c| view! { <option value=c selected={c == DEFAULT_CATEGORY}>{c}</option> })
                        .collect_view()}
                </select>
                <select
                    class="issue-form__priority"
                    on:change=move |ev| {
                        let priority = Priority::parse(&event_target_value(&ev)).unwrap_or_default();
                        state.update(|s| s.priority = priority);
                    }
                >
                    {Priority::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.as_str() selected={p == Priority::default()}>{p.label()}</option> })
                        .collect_view()}
                </select>
                <button class="button" type="submit">
                    "Create Issue"
                </button>
            </form>
            <div class="issue-filters">
                <select class="issue-filters__status" on:change=on_status>
                    <option value="">"All statuses"</option>
                    {TicketStatus::SELECTABLE
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
                <input
                    class="issue-filters__search"
                    type="search"
                    placeholder="Search issues"
                    on:input=move |ev| state.update(|s| s.set_search(event_target_value(&ev)))
                />
            </div>
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <p>"Loading..."</p> }
            >
                <Show when=move || state.with(|s| s.error.is_some())>
                    <p class="issue-list__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>
                <IssueTable role=role tickets=visible/>
                <div class="pager">
                    <button
                        class="pager__prev"
                        disabled=move || state.with(|s| s.page == 0)
                        on:click=move |_| state.update(IssueListState::prev_page)
                    >
                        "Previous"
                    </button>
                    <span class="pager__label">
                        {move || state.with(|s| format!("Page {} of {}", s.page + 1, s.page_count()))}
                    </span>
                    <button
                        class="pager__next"
                        disabled=move || state.with(|s| s.page + 1 >= s.page_count())
                        on:click=move |_| state.update(IssueListState::next_page)
                    >
                        "Next"
                    </button>
                </div>
            </Show>
        </div>
    }
}

//! Inbox view. Unread messages are highlighted until clicked; the search
//! box narrows the list by sender or content.

use leptos::prelude::*;

use crate::state::messages::MessagesState;

#[component]
pub fn MessagesPage() -> impl IntoView {
    let inbox = RwSignal::new(MessagesState::seeded());

    view! {
        <div class="messages-page">
            <header class="page-header">
                <h2>"Messages"</h2>
                <span class="messages-page__unread">
                    {move || format!("{} unread", inbox.with(MessagesState::unread_count))}
                </span>
            </header>
            <input
                class="messages-page__search"
                type="search"
                placeholder="Search messages..."
                prop:value=move || inbox.with(|s| s.search.clone())
                on:input=move |ev| inbox.update(|s| s.set_search(event_target_value(&ev)))
            />
            <ul class="messages">
                <For
                    each=move || inbox.with(MessagesState::visible)
                    key=|message| (message.id, message.read)
                    children=move |message| {
                        let id = message.id;
                        view! {
                            <li
                                class="messages__item"
                                class:messages__item--unread=!message.read
                                on:click=move |_| inbox.update(|s| s.mark_read(id))
                            >
                                <div class="messages__meta">
                                    <strong>{message.sender}</strong>
                                    <span class="messages__time">{message.timestamp}</span>
                                </div>
                                <p>{message.content}</p>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

//! Notifications page with a "Mark all as read" action.

use leptos::prelude::*;

use crate::state::notifications::NotificationsState;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let list = RwSignal::new(NotificationsState::seeded());

    view! {
        <div class="notifications-page">
            <header class="page-header">
                <h2>"Notifications"</h2>
                <span class="notifications-page__unread">
                    {move || format!("{} unread", list.with(NotificationsState::unread_count))}
                </span>
                <button
                    class="notifications-page__mark-all"
                    disabled=move || list.with(|s| s.unread_count() == 0)
                    on:click=move |_| list.update(NotificationsState::mark_all_read)
                >
                    "Mark all as read"
                </button>
            </header>
            <ul class="notifications">
                <For
                    each=move || list.get().items
                    key=|n| (n.id, n.read)
                    children=move |n| {
                        let id = n.id;
                        view! {
                            <li
                                class=format!("notification {}", n.kind.class())
                                class:notification--unread=!n.read
                                on:click=move |_| list.update(|s| s.mark_read(id))
                            >
                                <div class="notification__meta">
                                    <strong>{n.title}</strong>
                                    <span class="notification__time">{n.timestamp}</span>
                                </div>
                                <p>{n.message}</p>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

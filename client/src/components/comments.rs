//! Comment thread with an append-only input box.

use leptos::prelude::*;

use crate::state::comments::CommentThread;

#[component]
pub fn CommentsPanel() -> impl IntoView {
    let thread = RwSignal::new(CommentThread::seeded());
    let draft = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        let mut added = false;
        thread.update(|t| added = t.submit(&text));
        if added {
            draft.set(String::new());
        }
    };

    view! {
        <section class="comments">
            <h3>"Comments"</h3>
            <ul class="comments__list">
                <For
                    each=move || thread.get().comments
                    key=|comment| comment.id
                    children=|comment| {
                        view! {
                            <li class="comments__item">
                                <strong class="comments__user">{comment.user}</strong>
                                <p class="comments__content">{comment.content}</p>
                            </li>
                        }
                    }
                />
            </ul>
            <form class="comments__form" on:submit=on_submit>
                <textarea
                    class="comments__input"
                    placeholder="Add a comment..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
                <button class="button" type="submit">
                    "Post Comment"
                </button>
            </form>
        </section>
    }
}

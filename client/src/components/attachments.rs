//! File picker that lists attached files locally. Nothing is uploaded.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use crate::state::attachments::{AttachmentList, attachment_label};

#[component]
pub fn AttachmentsPanel() -> impl IntoView {
    let list = RwSignal::new(AttachmentList::default());

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            if let Some((name, size)) = picked_file(&ev) {
                list.update(|l| l.add(name, size));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, list);
        }
    };

    view! {
        <section class="attachments">
            <h3>"Attachments"</h3>
            <input class="attachments__input" type="file" on:change=on_change/>
            <ul class="attachments__list">
                <For
                    each=move || list.get().items
                    key=|attachment| attachment.id
                    children=|attachment| view! { <li>{attachment_label(&attachment)}</li> }
                />
            </ul>
        </section>
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn picked_file(ev: &leptos::ev::Event) -> Option<(String, u64)> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let file = input.files()?.get(0)?;
    Some((file.name(), file.size() as u64))
}

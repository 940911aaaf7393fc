//! Departments list loaded from the academic backend.
//!
//! ERROR HANDLING
//! ==============
//! A failed request shows the same empty state as an empty response; the
//! failure only reaches the console log.

use leptos::prelude::*;

use crate::net::api::fetch_departments;
use crate::net::types::Department;

#[component]
pub fn DepartmentsPage() -> impl IntoView {
    let departments = RwSignal::new(None::<Vec<Department>>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            departments.set(Some(fetch_departments().await));
        });
    });

    view! {
        <div class="departments-page">
            <header class="page-header">
                <h2>"Departments"</h2>
            </header>
            {move || match departments.get() {
                None => view! { <p>"Loading..."</p> }.into_any(),
                Some(list) if list.is_empty() => view! { <p>"No departments found."</p> }.into_any(),
                Some(list) => {
                    view! {
                        <table class="departments">
                            <thead>
                                <tr>
                                    <th>"Code"</th>
                                    <th>"Name"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|d| {
                                        view! {
                                            <tr>
                                                <td>{d.code.unwrap_or_else(|| "-".to_owned())}</td>
                                                <td>{d.name}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
